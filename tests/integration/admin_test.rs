//! Integration tests for the back-office administrator flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn admin_register_and_login() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/admin/register",
            Some(serde_json::json!({
                "name": "Boss",
                "email": "boss@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "boss@example.com");

    let token = app.login_admin("boss@example.com", "password123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn admin_login_sets_its_own_cookie() {
    let app = TestApp::new();
    app.register_admin("boss@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "email": "boss@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie.expect("No Set-Cookie header");
    assert!(cookie.starts_with("jwtAdmin="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn admin_register_rejects_duplicate_email() {
    let app = TestApp::new();
    app.register_admin("boss@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/admin/register",
            Some(serde_json::json!({
                "name": "Other Boss",
                "email": "boss@example.com",
                "password": "different456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn admin_login_unknown_email_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/admin/login",
            Some(serde_json::json!({
                "email": "ghost@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Admin not found");
}

#[tokio::test]
async fn admin_profile_round_trip() {
    let app = TestApp::new();
    app.register_admin("boss@example.com", "password123").await;
    let token = app.login_admin("boss@example.com", "password123").await;

    let response = app
        .request(
            "GET",
            "/admin/profile",
            None,
            Some(&format!("jwtAdmin={token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "boss@example.com");
}

#[tokio::test]
async fn admin_profile_rejects_a_user_token() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;
    let user_token = app.login_user("alice@example.com", "password123").await;

    // A customer token in the admin cookie slot must not open the admin
    // surface, even though both are HS256 tokens.
    let response = app
        .request(
            "GET",
            "/admin/profile",
            None,
            Some(&format!("jwtAdmin={user_token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_logout_clears_the_cookie() {
    let app = TestApp::new();
    app.register_admin("boss@example.com", "password123").await;
    let token = app.login_admin("boss@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/admin/logout",
            None,
            Some(&format!("jwtAdmin={token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie.expect("No Set-Cookie header on logout");
    assert!(cookie.starts_with("jwtAdmin="));
    assert!(cookie.contains("Max-Age=0"));
}
