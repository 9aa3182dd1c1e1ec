//! Authentication API handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use super::dto::{LoginRequest, LoginResponse, UserInfo};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::verify_password;
use crate::infrastructure::database::entities::user;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub db: sea_orm::DatabaseConnection,
    pub jwt_config: JwtConfig,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let found = user::Entity::find()
        .filter(
            user::Column::Username
                .eq(&request.username)
                .or(user::Column::Email.eq(&request.username)),
        )
        .one(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    let Some(found) = found else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    };

    if !found.is_active {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Account is disabled")),
        ));
    }

    let password_valid = verify_password(&request.password, &found.password_hash).unwrap_or(false);
    if !password_valid {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    }

    let mut active: user::ActiveModel = found.clone().into();
    active.last_login_at = Set(Some(Utc::now()));
    active.update(&state.db).await.ok();

    let role_str = found.role.as_str();
    let token = create_token(&found.id, &found.username, role_str, &state.jwt_config).map_err(
        |e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        },
    )?;

    let response = LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_config.expiration_hours * 3600,
        user: UserInfo {
            id: found.id,
            username: found.username,
            email: found.email,
            role: role_str.to_string(),
        },
    };

    Ok(Json(ApiResponse::success(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserInfo>>, (StatusCode, Json<ApiResponse<()>>)> {
    let found = user::Entity::find_by_id(&auth_user.user_id)
        .one(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    let Some(found) = found else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("User not found")),
        ));
    };

    Ok(Json(ApiResponse::success(UserInfo {
        role: found.role.as_str().to_string(),
        id: found.id,
        username: found.username,
        email: found.email,
    })))
}
