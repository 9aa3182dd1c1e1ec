//! Service DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceResponse {
    pub service_type: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 200, message = "service_type is required"))]
    pub service_type: String,
    /// Non-negative decimal string, e.g. "0.5"
    #[validate(length(min = 1, message = "start_rate is required"))]
    pub start_rate: String,
}
