//! Integration tests for the customer authentication flow.

use http::StatusCode;

use toko_auth::jwt::{JwtEncoder, SUBJECT_USER};

use crate::helpers::TestApp;

#[tokio::test]
async fn register_returns_created_with_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/register",
            Some(serde_json::json!({
                "name": "Alice",
                "username": "alice",
                "email": "alice@example.com",
                "phone_no": "0812345678",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Registration successful");
    assert_eq!(response.body["email"], "alice@example.com");
    // The digest must never leak into the registration response.
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/register",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/register",
            Some(serde_json::json!({
                "name": "Alice",
                "username": "alice",
                "email": "not-an-email",
                "phone_no": "0812345678",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn register_rejects_invalid_phone() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/register",
            Some(serde_json::json!({
                "name": "Alice",
                "username": "alice",
                "email": "alice@example.com",
                "phone_no": "not-a-phone",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/user/register",
            Some(serde_json::json!({
                "name": "Alice Again",
                "username": "alice2",
                "email": "alice@example.com",
                "phone_no": "0899999999",
                "password": "different456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn duplicate_check_runs_before_phone_validation() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;

    // Both the email duplicate and the phone format are wrong here; the
    // duplicate must win.
    let response = app
        .request(
            "POST",
            "/user/register",
            Some(serde_json::json!({
                "name": "Alice Again",
                "username": "alice2",
                "email": "alice@example.com",
                "phone_no": "bogus",
                "password": "different456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_returns_token_and_session_cookie() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/user/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["message"], "Login successful");
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let cookie = response.set_cookie.expect("No Set-Cookie header on login");
    assert!(cookie.starts_with("jwtUser="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("Max-Age=1800"));
}

#[tokio::test]
async fn malformed_body_gets_a_json_error() {
    let app = TestApp::new();

    // A body that is not JSON at all must still produce the standard
    // error object, never the framework's plain-text rejection.
    let response = app
        .request_raw("POST", "/user/login", "{not json", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().is_some_and(|m| !m.is_empty()));

    let register = app
        .request_raw("POST", "/user/register", "[]", None)
        .await;
    assert_eq!(register.status, StatusCode::BAD_REQUEST);
    assert_eq!(register.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn login_unknown_email_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/login",
            Some(serde_json::json!({
                "email": "ghost@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");
}

#[tokio::test]
async fn login_wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/user/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
    assert_eq!(response.body["message"], "Incorrect password");
}

#[tokio::test]
async fn profile_requires_a_session_cookie() {
    let app = TestApp::new();

    let response = app.request("GET", "/user/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn profile_returns_the_stored_record() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;
    let token = app.login_user("alice@example.com", "password123").await;

    let response = app
        .request(
            "GET",
            "/user/profile",
            None,
            Some(&format!("jwtUser={token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["data"]["email"], "alice@example.com");
    assert_eq!(response.body["data"]["name"], "Test User");
    // The record is returned wholesale, digest included under `password`;
    // the plaintext must not appear anywhere.
    let digest = response.body["data"]["password"]
        .as_str()
        .expect("No password digest in profile data");
    assert_ne!(digest, "password123");
    assert!(digest.starts_with("$argon2"));
}

#[tokio::test]
async fn profile_rejects_an_expired_token() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;
    let _ = app.login_user("alice@example.com", "password123").await;

    // Mint a token that expired ten minutes ago with the real signing key.
    let encoder = JwtEncoder::new(&app.config.auth.user_secret, -10, SUBJECT_USER);
    let (expired, _) = encoder.issue(1).expect("Failed to issue token");

    let response = app
        .request(
            "GET",
            "/user/profile",
            None,
            Some(&format!("jwtUser={expired}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn profile_rejects_a_tampered_token() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;
    let token = app.login_user("alice@example.com", "password123").await;

    // Flip the first character of the signature segment.
    let sig_start = token.rfind('.').expect("Not a JWT") + 1;
    let mut tampered = String::from(&token[..sig_start]);
    let sig = &token[sig_start..];
    tampered.push(if sig.starts_with('A') { 'B' } else { 'A' });
    tampered.push_str(&sig[1..]);

    let response = app
        .request(
            "GET",
            "/user/profile",
            None,
            Some(&format!("jwtUser={tampered}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_rejects_a_malformed_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/user/profile", None, Some("jwtUser=not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_rejects_an_admin_token_on_the_user_surface() {
    let app = TestApp::new();
    app.register_admin("boss@example.com", "password123").await;
    let admin_token = app.login_admin("boss@example.com", "password123").await;

    let response = app
        .request(
            "GET",
            "/user/profile",
            None,
            Some(&format!("jwtUser={admin_token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;
    let token = app.login_user("alice@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/user/logout",
            None,
            Some(&format!("jwtUser={token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Logout successful");

    let cookie = response.set_cookie.expect("No Set-Cookie header on logout");
    assert!(cookie.starts_with("jwtUser="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn logout_succeeds_without_a_session() {
    let app = TestApp::new();

    let response = app.request("POST", "/user/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Logout successful");
}

#[tokio::test]
async fn cookie_cleared_by_logout_is_treated_as_absent() {
    let app = TestApp::new();
    app.register_user("alice@example.com", "password123").await;
    let _ = app.login_user("alice@example.com", "password123").await;

    // After logout the browser holds `jwtUser=` with an empty value; the
    // profile route must treat that as no session at all.
    let response = app.request("GET", "/user/profile", None, Some("jwtUser=")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_session_lifecycle() {
    let app = TestApp::new();

    app.register_user("alice@example.com", "password123").await;
    let token = app.login_user("alice@example.com", "password123").await;

    let cookie = format!("jwtUser={token}");

    let profile = app.request("GET", "/user/profile", None, Some(&cookie)).await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["data"]["email"], "alice@example.com");

    let logout = app.request("POST", "/user/logout", None, Some(&cookie)).await;
    assert_eq!(logout.status, StatusCode::OK);

    // The token itself is still valid after logout; only the cookie is
    // cleared client-side.
    let after = app.request("GET", "/user/profile", None, Some(&cookie)).await;
    assert_eq!(after.status, StatusCode::OK);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
