use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::validation::{ApiJson, validate_required};
use super::{ApiError, AppState, AuthResponse, LoginRequest};
use crate::models::NewUser;

/// POST /auth/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let user = state.auth_service().register(payload).await?;
    Ok((StatusCode::CREATED, Json(AuthResponse::new(user))))
}

/// POST /auth/login
/// Plaintext credential check; any mismatch is a 401.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validate_required(&payload.username, "Username")?;

    let user = state
        .auth_service()
        .login(&payload.username, &payload.password)
        .await?;

    tracing::info!(user_id = user.id, "User logged in: {}", user.username);
    Ok(Json(AuthResponse::new(user)))
}
