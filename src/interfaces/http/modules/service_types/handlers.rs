//! Service type REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateServiceTypeRequest, ServiceTypeResponse, UpdateServiceTypeRequest};
use crate::domain::NewServiceType;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::{require_admin, AuthenticatedUser};
use crate::interfaces::http::modules::PricingApiState;
use crate::shared::validations::is_valid_identifier;

#[utoipa::path(
    get,
    path = "/api/v1/service-types",
    tag = "Service Types",
    responses(
        (status = 200, description = "Registered service types", body = ApiResponse<Vec<ServiceTypeResponse>>)
    )
)]
pub async fn list_service_types(
    State(state): State<PricingApiState>,
) -> Result<Json<ApiResponse<Vec<ServiceTypeResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let types = state
        .repos
        .service_types()
        .find_all()
        .await
        .map_err(error_response)?;
    let responses: Vec<ServiceTypeResponse> = types.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    get,
    path = "/api/v1/service-types/{name}",
    tag = "Service Types",
    params(("name" = String, Path, description = "Service type name")),
    responses(
        (status = 200, description = "Service type details", body = ApiResponse<ServiceTypeResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_service_type(
    State(state): State<PricingApiState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<ServiceTypeResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let service_type = state
        .pricing
        .service_type_by_name(&name)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(service_type.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/service-types",
    tag = "Service Types",
    security(("bearer_auth" = [])),
    request_body = CreateServiceTypeRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ServiceTypeResponse>),
        (status = 400, description = "Invalid data"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_service_type(
    State(state): State<PricingApiState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<CreateServiceTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceTypeResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    require_admin(&user)?;

    if !is_valid_identifier(&req.name) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "name must contain only alphanumeric characters or '_'",
            )),
        ));
    }

    let created = state
        .repos
        .service_types()
        .create(NewServiceType {
            name: req.name,
            display_name: req.display_name,
            description: req.description,
        })
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/service-types/{name}",
    tag = "Service Types",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Service type name")),
    request_body = UpdateServiceTypeRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ServiceTypeResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_service_type(
    State(state): State<PricingApiState>,
    Path(name): Path<String>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<UpdateServiceTypeRequest>,
) -> Result<Json<ApiResponse<ServiceTypeResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&user)?;

    let updated = state
        .repos
        .service_types()
        .update(&name, req.display_name, req.description)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(updated.into())))
}
