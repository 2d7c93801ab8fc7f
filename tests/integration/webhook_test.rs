//! Integration tests for the payment provider webhook.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{POLKA_KEY, TestApp};

#[tokio::test]
async fn test_upgrade_event_marks_user_red() {
    let app = TestApp::new();
    let user = app.create_user("lane@example.com", "04234").await;

    let response = app
        .request_with_auth(
            "POST",
            "/api/polka/webhooks",
            Some(json!({ "event": "user.upgraded", "data": { "user_id": user["id"] } })),
            Some(&format!("ApiKey {POLKA_KEY}")),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let login = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": "lane@example.com", "password": "04234" })),
            None,
        )
        .await;
    assert_eq!(login.body["is_chirpy_red"], true);
}

#[tokio::test]
async fn test_other_events_are_ignored() {
    let app = TestApp::new();
    let response = app
        .request_with_auth(
            "POST",
            "/api/polka/webhooks",
            Some(json!({ "event": "user.payment_failed", "data": { "user_id": uuid::Uuid::new_v4() } })),
            Some(&format!("ApiKey {POLKA_KEY}")),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request_with_auth(
            "POST",
            "/api/polka/webhooks",
            Some(json!({ "event": "user.upgraded", "data": { "user_id": uuid::Uuid::new_v4() } })),
            Some(&format!("ApiKey {POLKA_KEY}")),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_or_missing_key_is_unauthorized() {
    let app = TestApp::new();
    let user = app.create_user("lane@example.com", "04234").await;
    let body = json!({ "event": "user.upgraded", "data": { "user_id": user["id"] } });

    for auth in [
        None,
        Some("ApiKey wrong-key".to_string()),
        Some(format!("Bearer {POLKA_KEY}")),
        Some("ApiKey".to_string()),
    ] {
        let response = app
            .request_with_auth("POST", "/api/polka/webhooks", Some(body.clone()), auth.as_deref())
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "header {auth:?}");
    }

    let login = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": "lane@example.com", "password": "04234" })),
            None,
        )
        .await;
    assert_eq!(login.body["is_chirpy_red"], false);
}
