//! Integration tests for health, metrics and reset.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_healthz() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/healthz", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "OK");
}

#[tokio::test]
async fn test_file_server_hits_are_counted() {
    let app = TestApp::new();
    for _ in 0..3 {
        app.request("GET", "/app/", None, None).await;
    }
    app.request("GET", "/api/healthz", None, None).await;

    let metrics = app.request("GET", "/admin/metrics", None, None).await;
    assert_eq!(metrics.status, StatusCode::OK);
    assert!(metrics.text.contains("Chirpy has been visited 3 times!"));
}

#[tokio::test]
async fn test_reset_in_dev_wipes_users_and_hits() {
    let app = TestApp::new();
    app.create_user("lane@example.com", "04234").await;
    app.request("GET", "/app/", None, None).await;

    let reset = app.request("POST", "/admin/reset", None, None).await;
    assert_eq!(reset.status, StatusCode::OK);

    let metrics = app.request("GET", "/admin/metrics", None, None).await;
    assert!(metrics.text.contains("visited 0 times"));

    let user = app.repos.users.find_by_email("lane@example.com").await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_reset_outside_dev_is_forbidden() {
    let app = TestApp::with_platform("production");
    app.create_user("lane@example.com", "04234").await;

    let reset = app.request("POST", "/admin/reset", None, None).await;
    assert_eq!(reset.status, StatusCode::FORBIDDEN);

    let user = app.repos.users.find_by_email("lane@example.com").await.unwrap();
    assert!(user.is_some());
}

#[tokio::test]
async fn test_file_server_serves_public_assets() {
    let app = TestApp::new();
    let response = app.request("GET", "/app/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Welcome to Chirpy"));
}

#[tokio::test]
async fn test_file_server_does_not_expose_config() {
    let app = TestApp::with_platform("production");
    for path in [
        "/app/config/default.toml",
        "/app/config/development.toml",
        "/app/../config/default.toml",
        "/app/Cargo.toml",
    ] {
        let response = app.request("GET", path, None, None).await;
        assert_ne!(response.status, StatusCode::OK, "{path} was served");
    }
}
