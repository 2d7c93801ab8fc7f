//! Credential extractors built on the `chirpy-auth` header parser.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use chirpy_auth::credential::extract_bearer;
use chirpy_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// The user behind a valid `Bearer` access token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = state.sessions.authenticate_headers(&parts.headers)?;
        Ok(Self(user_id))
    }
}

/// The raw `Bearer` token, unverified. Used by the refresh-token endpoints.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(extract_bearer(&parts.headers)?))
    }
}

/// Proof that the request carried the configured `ApiKey`.
#[derive(Debug, Clone, Copy)]
pub struct ServiceKey;

impl FromRequestParts<AppState> for ServiceKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.sessions.authorize_service(&parts.headers)?;
        Ok(Self)
    }
}
