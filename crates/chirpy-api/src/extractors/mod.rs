//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{AuthUser, BearerToken, ServiceKey};
pub use json::ValidatedJson;
