//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use chirpy_api::{AppState, build_app};
use chirpy_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, DatabaseProvider, LoggingConfig, ServerConfig,
};
use chirpy_database::Repositories;

/// Service key the test app expects from the webhook caller.
pub const POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Collaborators behind the router, for direct inspection
    pub repos: Repositories,
}

impl TestApp {
    /// Create a test application on the `dev` platform with in-memory storage
    pub fn new() -> Self {
        Self::with_platform("dev")
    }

    /// Create a test application on the given platform
    pub fn with_platform(platform: &str) -> Self {
        let mut auth = AuthConfig::new("integration-test-secret");
        auth.polka_api_key = POLKA_KEY.to_string();

        let config = AppConfig {
            server: ServerConfig {
                platform: platform.to_string(),
                ..ServerConfig::default()
            },
            database: DatabaseConfig {
                provider: DatabaseProvider::Memory,
                ..DatabaseConfig::default()
            },
            auth,
            logging: LoggingConfig::default(),
        };

        let repos = Repositories::in_memory();
        let router = build_app(AppState::new(config, &repos));

        Self { router, repos }
    }

    /// Create a user through the API and return the response body
    pub async fn create_user(&self, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "User creation failed: {:?}",
            response.body
        );
        response.body
    }

    /// Login and return `(access_token, refresh_token)`
    pub async fn login(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        let field = |name: &str| {
            response
                .body
                .get(name)
                .and_then(|v| v.as_str())
                .expect("token missing from login response")
                .to_string()
        };
        (field("token"), field("refresh_token"))
    }

    /// Make a request with an optional `Bearer` token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_auth(method, path, body, authorization.as_deref())
            .await
    }

    /// Make a request with a raw `Authorization` header value
    pub async fn request_with_auth(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, body_str, authorization).await
    }

    /// Make a request with a raw body
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: String,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when not JSON
    pub body: Value,
    /// Raw body text
    pub text: String,
}
