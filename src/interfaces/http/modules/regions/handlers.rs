//! Region REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use rust_decimal::Decimal;

use super::dto::{CreateRegionRequest, RegionResponse, UpdateRegionRequest};
use crate::domain::NewRegion;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::{require_admin, AuthenticatedUser};
use crate::interfaces::http::modules::PricingApiState;
use crate::shared::validations::{is_valid_identifier, is_valid_rate_string};

#[utoipa::path(
    get,
    path = "/api/v1/regions",
    tag = "Regions",
    responses(
        (status = 200, description = "All regions", body = ApiResponse<Vec<RegionResponse>>)
    )
)]
pub async fn list_regions(
    State(state): State<PricingApiState>,
) -> Result<Json<ApiResponse<Vec<RegionResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let regions = state
        .repos
        .regions()
        .find_all()
        .await
        .map_err(error_response)?;
    let responses: Vec<RegionResponse> = regions.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    get,
    path = "/api/v1/regions/{name}",
    tag = "Regions",
    params(("name" = String, Path, description = "Region name")),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_region(
    State(state): State<PricingApiState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<RegionResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let region = state
        .pricing
        .region_by_name(&name)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(region.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/regions",
    tag = "Regions",
    security(("bearer_auth" = [])),
    request_body = CreateRegionRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<RegionResponse>),
        (status = 400, description = "Invalid data"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_region(
    State(state): State<PricingApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<CreateRegionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegionResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&user)?;

    if !is_valid_identifier(&req.name) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "name must contain only alphanumeric characters or '_'",
            )),
        ));
    }

    // A new region prices every registered service type, so the request map
    // must supply one well-formed starting rate per type, no more, no less.
    let registered = state
        .repos
        .service_types()
        .find_all()
        .await
        .map_err(error_response)?;

    let mut errors: Vec<String> = Vec::new();
    let mut initial_rates: Vec<(String, Decimal)> = Vec::new();

    for service_type in &registered {
        match req.services.get(&service_type.name) {
            None => errors.push(format!("{}: is a required parameter", service_type.name)),
            Some(raw) if !is_valid_rate_string(raw) => {
                errors.push(format!("{}: must be a valid decimal number", service_type.name))
            }
            Some(raw) => match raw.parse::<Decimal>() {
                Ok(value) => initial_rates.push((service_type.name.clone(), value)),
                Err(_) => errors.push(format!(
                    "{}: must be a valid decimal number",
                    service_type.name
                )),
            },
        }
    }
    for key in req.services.keys() {
        if !registered.iter().any(|t| &t.name == key) {
            errors.push(format!("{}: is not a registered service type", key));
        }
    }

    if !errors.is_empty() {
        errors.sort();
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(errors.join("; "))),
        ));
    }

    let region = state
        .pricing
        .create_region(
            &user.username,
            NewRegion {
                name: req.name,
                description: req.description,
            },
            initial_rates,
        )
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(region.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/regions/{name}",
    tag = "Regions",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Region name")),
    request_body = UpdateRegionRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<RegionResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_region(
    State(state): State<PricingApiState>,
    Path(name): Path<String>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<UpdateRegionRequest>,
) -> Result<Json<ApiResponse<RegionResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&user)?;

    let updated = state
        .repos
        .regions()
        .update_description(&name, req.description)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(updated.into())))
}
