//! Service type DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ServiceType;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceTypeResponse {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceType> for ServiceTypeResponse {
    fn from(t: ServiceType) -> Self {
        Self {
            name: t.name,
            display_name: t.display_name,
            description: t.description,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceTypeRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "display_name is required"))]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceTypeRequest {
    #[validate(length(min = 1, max = 200, message = "display_name must not be empty"))]
    pub display_name: Option<String>,
    pub description: Option<String>,
}
