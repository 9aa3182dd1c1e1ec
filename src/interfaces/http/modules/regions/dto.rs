//! Region DTOs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Region;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegionResponse {
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Region> for RegionResponse {
    fn from(r: Region) -> Self {
        Self {
            name: r.name,
            description: r.description,
            created_at: r.created_at,
        }
    }
}

/// Creating a region also prices every registered service type there, so the
/// request carries a starting rate per type name.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRegionRequest {
    #[validate(length(min = 1, max = 200, message = "region name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Service type name to starting rate (non-negative decimal string)
    #[serde(default)]
    pub services: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRegionRequest {
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
}
