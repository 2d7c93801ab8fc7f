//! Integration tests for the login, refresh and revoke flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let created = app.create_user("walt@breakingbad.com", "04234").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "walt@breakingbad.com",
                "password": "04234",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], created["id"]);
    assert_eq!(response.body["email"], "walt@breakingbad.com");
    assert_eq!(response.body["is_chirpy_red"], false);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["refresh_token"].as_str().map(str::len), Some(64));
    assert!(response.body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_bad_logins_are_indistinguishable() {
    let app = TestApp::new();
    app.create_user("walt@breakingbad.com", "04234").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({ "email": "walt@breakingbad.com", "password": "nope" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({ "email": "jesse@breakingbad.com", "password": "04234" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_refresh_issues_new_access_token() {
    let app = TestApp::new();
    app.create_user("saul@bettercall.com", "123456").await;
    let (_, refresh_token) = app.login("saul@bettercall.com", "123456").await;

    let response = app
        .request("POST", "/api/refresh", None, Some(&refresh_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap().to_string();

    let update = app
        .request(
            "PUT",
            "/api/users",
            Some(serde_json::json!({ "email": "jimmy@bettercall.com", "password": "654321" })),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);

    // Not rotated: the same refresh token keeps working.
    let again = app
        .request("POST", "/api/refresh", None, Some(&refresh_token))
        .await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn test_access_token_is_not_a_refresh_token() {
    let app = TestApp::new();
    app.create_user("saul@bettercall.com", "123456").await;
    let (access_token, _) = app.login("saul@bettercall.com", "123456").await;

    let response = app
        .request("POST", "/api/refresh", None, Some(&access_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_revoke_kills_refresh_token() {
    let app = TestApp::new();
    app.create_user("saul@bettercall.com", "123456").await;
    let (_, refresh_token) = app.login("saul@bettercall.com", "123456").await;

    let revoke = app
        .request("POST", "/api/revoke", None, Some(&refresh_token))
        .await;
    assert_eq!(revoke.status, StatusCode::NO_CONTENT);

    let again = app
        .request("POST", "/api/revoke", None, Some(&refresh_token))
        .await;
    assert_eq!(again.status, StatusCode::NO_CONTENT);

    let revoked = app
        .request("POST", "/api/refresh", None, Some(&refresh_token))
        .await;
    let missing = app
        .request("POST", "/api/refresh", None, Some(&"ab".repeat(32)))
        .await;
    assert_eq!(revoked.status, StatusCode::UNAUTHORIZED);
    assert_eq!(revoked.body, missing.body);
}

#[tokio::test]
async fn test_revoke_unknown_token_is_no_content() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/revoke", None, Some("not-a-real-token"))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_or_garbled_header_is_unauthorized() {
    let app = TestApp::new();
    for auth in [None, Some("Bearer"), Some("InvalidBearer abc"), Some("ApiKey abc")] {
        let response = app
            .request_with_auth("POST", "/api/refresh", None, auth)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "header {auth:?}");
        assert_eq!(response.body["message"], "Unauthorized");
    }

    let revoke = app.request_with_auth("POST", "/api/revoke", None, None).await;
    assert_eq!(revoke.status, StatusCode::UNAUTHORIZED);
}
