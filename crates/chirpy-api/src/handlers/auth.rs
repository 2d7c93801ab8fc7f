//! Auth handlers: login, refresh, revoke.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{BearerToken, ValidatedJson};
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state.sessions.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        user: result.user.into(),
        token: result.access_token,
        refresh_token: result.refresh_token.token,
    }))
}

/// POST /api/refresh
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.sessions.refresh(&token).await?;
    Ok(Json(TokenResponse { token }))
}

/// POST /api/revoke
///
/// Answers 204 whether or not the token existed.
pub async fn revoke(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, ApiError> {
    state.sessions.revoke(&token).await?;
    Ok(StatusCode::NO_CONTENT)
}
