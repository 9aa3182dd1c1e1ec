//! Service REST API handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use rust_decimal::Decimal;

use super::dto::{CreateServiceRequest, ServiceResponse};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::{require_admin, AuthenticatedUser};
use crate::interfaces::http::modules::PricingApiState;
use crate::shared::validations::is_valid_rate_string;

#[utoipa::path(
    get,
    path = "/api/v1/regions/{name}/services",
    tag = "Services",
    params(("name" = String, Path, description = "Region name")),
    responses(
        (status = 200, description = "Services offered at the region", body = ApiResponse<Vec<ServiceResponse>>),
        (status = 404, description = "Region not found")
    )
)]
pub async fn list_services(
    State(state): State<PricingApiState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<Vec<ServiceResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let region = state
        .pricing
        .region_by_name(&name)
        .await
        .map_err(error_response)?;

    let services = state
        .repos
        .services()
        .find_for_region(region.id)
        .await
        .map_err(error_response)?;

    let type_names: HashMap<i32, String> = state
        .repos
        .service_types()
        .find_all()
        .await
        .map_err(error_response)?
        .into_iter()
        .map(|t| (t.id, t.name))
        .collect();

    let responses: Vec<ServiceResponse> = services
        .into_iter()
        .map(|s| ServiceResponse {
            service_type: type_names
                .get(&s.service_type_id)
                .cloned()
                .unwrap_or_default(),
            region: region.name.clone(),
            created_at: s.created_at,
        })
        .collect();

    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    get,
    path = "/api/v1/regions/{name}/services/{service_type}",
    tag = "Services",
    params(
        ("name" = String, Path, description = "Region name"),
        ("service_type" = String, Path, description = "Service type name")
    ),
    responses(
        (status = 200, description = "Service details", body = ApiResponse<ServiceResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_service(
    State(state): State<PricingApiState>,
    Path((name, service_type)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ServiceResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let service = state
        .pricing
        .find_service(&name, &service_type)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(ServiceResponse {
        service_type,
        region: name,
        created_at: service.created_at,
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/regions/{name}/services",
    tag = "Services",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Region name")),
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created with its initial rate", body = ApiResponse<ServiceResponse>),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Region or service type not found"),
        (status = 409, description = "Service of this type already offered")
    )
)]
pub async fn create_service(
    State(state): State<PricingApiState>,
    Path(name): Path<String>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&user)?;

    if !is_valid_rate_string(&req.start_rate) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("start_rate must be a valid number >= zero")),
        ));
    }
    let start_rate: Decimal = req.start_rate.parse().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("start_rate must be a valid number >= zero")),
        )
    })?;

    let service = state
        .pricing
        .add_service(&user.username, &name, &req.service_type, start_rate)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ServiceResponse {
            service_type: req.service_type,
            region: name,
            created_at: service.created_at,
        })),
    ))
}
