//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: ComponentHealth,
}

/// Component health status
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    pub latency_ms: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health_check(
    State(state): State<HealthState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let started = Instant::now();
    let ping = state
        .db
        .execute(Statement::from_string(
            state.db.get_database_backend(),
            "SELECT 1",
        ))
        .await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let database = match ping {
        Ok(_) => ComponentHealth {
            status: "up".to_string(),
            latency_ms: Some(latency_ms),
        },
        Err(_) => ComponentHealth {
            status: "down".to_string(),
            latency_ms: None,
        },
    };

    let healthy = database.status == "up";
    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
