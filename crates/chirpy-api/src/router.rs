//! Route definitions for the Chirpy HTTP API.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(auth_routes())
        .merge(webhook_routes())
        .route("/healthz", get(handlers::health::healthz));

    Router::new()
        .nest("/api", api_routes)
        .nest("/admin", admin_routes())
        .merge(file_server_routes(&state))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Account creation and credential updates
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users",
        post(handlers::user::create_user).put(handlers::user::update_user),
    )
}

/// Login and refresh-token endpoints
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/revoke", post(handlers::auth::revoke))
}

/// Service-to-service callbacks
fn webhook_routes() -> Router<AppState> {
    Router::new().route("/polka/webhooks", post(handlers::webhook::polka_webhook))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(handlers::admin::metrics))
        .route("/reset", post(handlers::admin::reset))
}

/// Static files under `/app`, counted by the hit middleware.
fn file_server_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest_service("/app", ServeDir::new(&state.config.server.static_dir))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::metrics::count_hits,
        ))
}
