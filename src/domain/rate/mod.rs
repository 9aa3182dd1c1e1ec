//! Rate aggregate
//!
//! Contains the Rate entry, the RateHistory resolution logic, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{Rate, RateHistory};
pub use repository::RateRepository;
