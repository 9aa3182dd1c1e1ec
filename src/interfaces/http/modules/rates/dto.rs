//! Rate DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Rate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RateResponse {
    /// Price value as a decimal string
    #[schema(value_type = String)]
    pub rate: Decimal,
    pub effective_from: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub service_type: String,
    pub region: String,
}

impl RateResponse {
    pub fn from_rate(rate: Rate, service_type: &str, region: &str) -> Self {
        Self {
            rate: rate.value,
            effective_from: rate.effective_from,
            created_at: rate.created_at,
            service_type: service_type.to_string(),
            region: region.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRateRequest {
    /// Non-negative decimal string, e.g. "0.5"
    #[validate(length(min = 1, message = "rate is required"))]
    pub rate: String,
    /// Effective date as dd/mm/yyyy; defaults to now
    pub date: Option<String>,
}

/// Optional point-in-time override for the current-rate query
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct RateQuery {
    /// Resolve the rate in force at this date (dd/mm/yyyy) instead of now
    pub date: Option<String>,
}
