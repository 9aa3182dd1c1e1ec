//! Service type aggregate

pub mod model;
pub mod repository;

pub use model::{NewServiceType, ServiceType};
pub use repository::ServiceTypeRepository;
