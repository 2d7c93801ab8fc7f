//! # chirpy-api
//!
//! HTTP API layer for Chirpy built on Axum.
//!
//! A thin adapter over `chirpy-auth`: request DTOs are validated at the
//! boundary, credentials are pulled by extractors, and every domain error
//! is mapped to a status code in one place.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
