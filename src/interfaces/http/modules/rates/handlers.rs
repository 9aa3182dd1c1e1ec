//! Rate REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::dto::{CreateRateRequest, RateQuery, RateResponse};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::{require_admin, AuthenticatedUser};
use crate::interfaces::http::modules::PricingApiState;
use crate::shared::validations::{is_valid_rate_string, parse_day_month_year};

fn bad_date() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(
            "date must be a valid date in the format: dd/mm/yyyy",
        )),
    )
}

fn parse_optional_date(
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, (StatusCode, Json<ApiResponse<()>>)> {
    match raw {
        None => Ok(None),
        Some(s) => parse_day_month_year(s).map(Some).ok_or_else(bad_date),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/regions/{name}/services/{service_type}/rates",
    tag = "Rates",
    params(
        ("name" = String, Path, description = "Region name"),
        ("service_type" = String, Path, description = "Service type name")
    ),
    responses(
        (status = 200, description = "Full rate history in insertion order", body = ApiResponse<Vec<RateResponse>>),
        (status = 404, description = "Not found")
    )
)]
pub async fn list_rates(
    State(state): State<PricingApiState>,
    Path((name, service_type)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<RateResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let history = state
        .pricing
        .rate_history(&name, &service_type)
        .await
        .map_err(error_response)?;

    let responses: Vec<RateResponse> = history
        .into_iter()
        .map(|r| RateResponse::from_rate(r, &service_type, &name))
        .collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    post,
    path = "/api/v1/regions/{name}/services/{service_type}/rates",
    tag = "Rates",
    security(("bearer_auth" = [])),
    params(
        ("name" = String, Path, description = "Region name"),
        ("service_type" = String, Path, description = "Service type name")
    ),
    request_body = CreateRateRequest,
    responses(
        (status = 201, description = "Rate appended", body = ApiResponse<RateResponse>),
        (status = 400, description = "Invalid rate or date"),
        (status = 404, description = "Not found")
    )
)]
pub async fn create_rate(
    State(state): State<PricingApiState>,
    Path((name, service_type)): Path<(String, String)>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<CreateRateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RateResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&user)?;

    if !is_valid_rate_string(&req.rate) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("rate must be a valid number >= zero")),
        ));
    }
    let value: Decimal = req.rate.parse().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("rate must be a valid number >= zero")),
        )
    })?;
    let effective_from = parse_optional_date(req.date.as_deref())?;

    let rate = state
        .pricing
        .set_rate(&user.username, &name, &service_type, value, effective_from)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RateResponse::from_rate(
            rate,
            &service_type,
            &name,
        ))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/regions/{name}/services/{service_type}/rates/current",
    tag = "Rates",
    params(
        ("name" = String, Path, description = "Region name"),
        ("service_type" = String, Path, description = "Service type name"),
        RateQuery
    ),
    responses(
        (status = 200, description = "Rate in force; data is null when none has taken effect", body = ApiResponse<RateResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn current_rate(
    State(state): State<PricingApiState>,
    Path((name, service_type)): Path<(String, String)>,
    Query(query): Query<RateQuery>,
) -> Result<Json<ApiResponse<Option<RateResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let as_of = parse_optional_date(query.date.as_deref())?;

    let rate = state
        .pricing
        .current_rate(&name, &service_type, as_of)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(
        rate.map(|r| RateResponse::from_rate(r, &service_type, &name)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/regions/{name}/services/{service_type}/rates/future",
    tag = "Rates",
    params(
        ("name" = String, Path, description = "Region name"),
        ("service_type" = String, Path, description = "Service type name")
    ),
    responses(
        (status = 200, description = "Next scheduled rate, or the current one when nothing is scheduled", body = ApiResponse<RateResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn next_future_rate(
    State(state): State<PricingApiState>,
    Path((name, service_type)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Option<RateResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let rate = state
        .pricing
        .next_future_rate(&name, &service_type)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(
        rate.map(|r| RateResponse::from_rate(r, &service_type, &name)),
    )))
}
