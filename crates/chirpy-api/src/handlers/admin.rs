//! Admin handlers: hit metrics and development reset.

use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::response::Html;
use tracing::warn;

use chirpy_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.hits.load(Ordering::Relaxed);
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>\n"
    ))
}

/// POST /admin/reset
///
/// Only available on the `dev` platform. Zeroes the hit counter and deletes
/// every user along with their refresh tokens.
pub async fn reset(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    if !state.config.server.is_dev() {
        return Err(AppError::authorization("Reset is only allowed in dev environment.").into());
    }

    state.hits.store(0, Ordering::Relaxed);
    let deleted = state.users.reset().await?;
    warn!(deleted, "Development reset wiped all users");

    Ok("Hits reset to 0 and database reset to initial state.")
}
