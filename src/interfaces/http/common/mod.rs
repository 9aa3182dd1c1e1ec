//! Common API types: response envelope, error mapping, validated JSON

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard response envelope.
///
/// Every REST endpoint wraps its payload in this shape.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Map a domain error to its transport-level status. Database faults hide
/// behind `Validation` with a known prefix, so transient errors are split
/// out first.
pub fn error_response(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = if e.is_transient() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        match &e {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        let (status, _) = error_response(DomainError::Validation("bad rate".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(DomainError::Conflict("duplicate".to_string()));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = error_response(DomainError::NotFound {
            entity: "Region",
            field: "name",
            value: "nowhere".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = error_response(DomainError::Forbidden("admins only".to_string()));
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn database_faults_map_to_internal_error() {
        let (status, _) = error_response(DomainError::Validation(
            "Database error: connection lost".to_string(),
        ));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
