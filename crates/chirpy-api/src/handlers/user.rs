//! Account handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use chirpy_core::error::AppError;
use chirpy_entity::user::NewUser;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let hashed_password = state.sessions.hash_password(&req.password)?;
    let user = state
        .users
        .create(NewUser {
            email: req.email,
            hashed_password,
        })
        .await?;

    info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /api/users
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let hashed_password = state.sessions.hash_password(&req.password)?;
    let user = state
        .users
        .update_credentials(user_id, &req.email, &hashed_password)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    info!(user_id = %user.id, "User credentials updated");
    Ok(Json(user.into()))
}
