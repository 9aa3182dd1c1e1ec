//! Region aggregate

pub mod model;
pub mod repository;

pub use model::{NewRegion, Region};
pub use repository::RegionRepository;
