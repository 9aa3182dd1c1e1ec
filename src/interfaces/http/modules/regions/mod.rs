pub mod dto;
pub mod handlers;

pub use dto::{CreateRegionRequest, RegionResponse, UpdateRegionRequest};
pub use handlers::{create_region, get_region, list_regions, update_region};
