pub mod dto;
pub mod handlers;

pub use dto::{CreateServiceTypeRequest, ServiceTypeResponse, UpdateServiceTypeRequest};
pub use handlers::{create_service_type, get_service_type, list_service_types, update_service_type};
