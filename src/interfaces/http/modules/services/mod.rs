pub mod dto;
pub mod handlers;

pub use dto::{CreateServiceRequest, ServiceResponse};
pub use handlers::{create_service, get_service, list_services};
