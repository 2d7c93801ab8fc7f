//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use chirpy_auth::Credential;

/// Logs request method, path, credential scheme, status, and duration.
///
/// Only the scheme of a presented credential is recorded, never its value.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let credential = Credential::from_headers(request.headers())
        .map_or("none", |c| c.scheme().as_str());
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        credential,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "HTTP request"
    );

    response
}
