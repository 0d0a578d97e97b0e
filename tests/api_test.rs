//! Integration tests for API endpoints.
//!
//! Requests go through the full router, services and gateway against an
//! in-memory SQLite database.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use pro_directory::{create_router, AppState, Config};

// =============================================================================
// Helpers
// =============================================================================

async fn app_with(config: Config) -> Router {
    let gateway = common::gateway().await;
    create_router(AppState::from_gateway(gateway, &config))
}

async fn app() -> Router {
    app_with(common::config()).await
}

struct TestResponse {
    status: StatusCode,
    set_cookie: Option<String>,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }

    /// `name=value` pair to send back in a `Cookie` header
    fn session_cookie(&self) -> String {
        self.set_cookie
            .as_deref()
            .and_then(|c| c.split(';').next())
            .expect("Set-Cookie header")
            .to_string()
    }
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        set_cookie,
        body,
    }
}

async fn register(app: &Router, username: &str, password: &str, is_staff: bool) -> TestResponse {
    send(
        app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "username": username,
            "password": password,
            "fullName": "Test User",
            "isStaff": is_staff,
        })),
    )
    .await
}

async fn login(app: &Router, username: &str, password: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

// =============================================================================
// Operational Endpoints
// =============================================================================

#[tokio::test]
async fn test_root_endpoint() {
    let app = app().await;
    let response = send(&app, Method::GET, "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, b"Professional Directory API");
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = app().await;
    let response = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_register_login_and_current_user() {
    let app = app().await;

    let registered = register(&app, "alice", "secret1", false).await;
    assert_eq!(registered.status, StatusCode::CREATED);
    let body = registered.json();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["fullName"], "Test User");
    assert_eq!(body["isStaff"], false);
    assert!(body.get("password").is_none());

    let logged_in = login(&app, "alice", "secret1").await;
    assert_eq!(logged_in.status, StatusCode::OK);
    assert_eq!(logged_in.json()["username"], "alice");
    assert!(logged_in.json().get("password").is_none());

    let wrong = login(&app, "alice", "wrong").await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.json()["message"], "Invalid username or password");

    let anonymous = send(&app, Method::GET, "/api/user", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.json()["message"], "Not authenticated");

    let cookie = logged_in.session_cookie();
    let me = send(&app, Method::GET, "/api/user", Some(&cookie), None).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json()["username"], "alice");
}

#[tokio::test]
async fn test_registration_signs_user_in() {
    let app = app().await;

    let registered = register(&app, "alice", "secret1", false).await;
    let cookie = registered.session_cookie();

    let me = send(&app, Method::GET, "/api/user", Some(&cookie), None).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json()["id"], registered.json()["id"]);
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let app = app().await;

    let first = register(&app, "alice", "secret1", false).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = register(&app, "alice", "another", true).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.json()["message"], "Username already exists");
    assert!(second.set_cookie.is_none());

    // The original credentials still work
    let logged_in = login(&app, "alice", "secret1").await;
    assert_eq!(logged_in.status, StatusCode::OK);
    assert_eq!(logged_in.json()["isStaff"], false);
}

#[tokio::test]
async fn test_unknown_user_gets_generic_failure() {
    let app = app().await;

    let response = login(&app, "nobody", "secret1").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_with_missing_credentials_is_unauthorized() {
    let app = app().await;
    register(&app, "alice", "secret1", false).await;

    let empty_password = login(&app, "alice", "").await;
    assert_eq!(empty_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(empty_password.json()["message"], "Invalid username or password");

    let no_fields = send(&app, Method::POST, "/api/login", None, Some(json!({}))).await;
    assert_eq!(no_fields.status, StatusCode::UNAUTHORIZED);
    assert_eq!(no_fields.json()["message"], "Invalid username or password");
    assert!(no_fields.set_cookie.is_none());
}

#[tokio::test]
async fn test_register_requires_username_and_password() {
    let app = app().await;

    let response = send(
        &app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({ "username": "", "password": "", "fullName": "x" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let app = app().await;

    let response = register(&app, "alice", "secret1", false).await;
    let set_cookie = response.set_cookie.expect("Set-Cookie header");

    assert!(set_cookie.starts_with("sid="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=86400"));
    assert!(!set_cookie.contains("Secure"));
}

#[tokio::test]
async fn test_production_cookie_is_secure() {
    let app = app_with(common::config().with_production(true)).await;

    let response = register(&app, "alice", "secret1", false).await;
    let set_cookie = response.set_cookie.expect("Set-Cookie header");

    assert!(set_cookie.contains("Secure"));
}

#[tokio::test]
async fn test_tampered_cookie_is_rejected() {
    let app = app().await;
    let registered = register(&app, "alice", "secret1", false).await;
    let mut cookie = registered.session_cookie();
    cookie.push('0');

    let response = send(&app, Method::GET, "/api/user", Some(&cookie), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let forged = send(&app, Method::GET, "/api/user", Some("sid=deadbeef"), None).await;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_destroys_session() {
    let app = app().await;
    let cookie = register(&app, "alice", "secret1", false)
        .await
        .session_cookie();

    let response = send(&app, Method::POST, "/api/logout", Some(&cookie), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());
    assert!(response
        .set_cookie
        .as_deref()
        .is_some_and(|c| c.starts_with("sid=")));

    // The old cookie no longer maps to a session
    let me = send(&app, Method::GET, "/api/user", Some(&cookie), None).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session_succeeds() {
    let app = app().await;

    let response = send(&app, Method::POST, "/api/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

// =============================================================================
// Professionals
// =============================================================================

#[tokio::test]
async fn test_directory_requires_session() {
    let app = app().await;

    let response = send(&app, Method::GET, "/api/professionals", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_staff_cannot_edit() {
    let app = app().await;
    let cookie = register(&app, "bob", "secret1", false)
        .await
        .session_cookie();

    let response = send(
        &app,
        Method::POST,
        "/api/professionals",
        Some(&cookie),
        Some(json!({
            "fullName": "jane smith",
            "professionalTitle": "site engineer",
            "phoneNumber": "0911000000",
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Reading is still allowed
    let listed = send(&app, Method::GET, "/api/professionals", Some(&cookie), None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.json(), json!([]));
}

#[tokio::test]
async fn test_non_staff_refused_before_body_validation() {
    let app = app().await;
    let cookie = register(&app, "bob", "secret1", false)
        .await
        .session_cookie();

    let invalid_create = send(
        &app,
        Method::POST,
        "/api/professionals",
        Some(&cookie),
        Some(json!({ "fullName": "", "professionalTitle": "", "phoneNumber": "" })),
    )
    .await;
    assert_eq!(invalid_create.status, StatusCode::FORBIDDEN);

    let malformed_update = send(
        &app,
        Method::PATCH,
        &format!("/api/professionals/{}", uuid::Uuid::new_v4()),
        Some(&cookie),
        Some(json!({ "phoneNumber": 42 })),
    )
    .await;
    assert_eq!(malformed_update.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_directory_lifecycle() {
    let app = app().await;
    let cookie = register(&app, "admin", "secret1", true)
        .await
        .session_cookie();

    let created = send(
        &app,
        Method::POST,
        "/api/professionals",
        Some(&cookie),
        Some(json!({
            "fullName": "jane smith",
            "professionalTitle": "site engineer",
            "phoneNumber": "0911000000",
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let created = created.json();
    assert_eq!(created["fullName"], "Jane Smith");
    assert_eq!(created["professionalTitle"], "Site Engineer");
    let id = created["id"].as_str().unwrap().to_string();

    let updated = send(
        &app,
        Method::PATCH,
        &format!("/api/professionals/{id}"),
        Some(&cookie),
        Some(json!({ "phoneNumber": "123" })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let updated = updated.json();
    assert_eq!(updated["phoneNumber"], "123");
    assert_eq!(updated["fullName"], "Jane Smith");
    assert_eq!(updated["professionalTitle"], "Site Engineer");

    let found = send(
        &app,
        Method::GET,
        "/api/professionals?search=Smith",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.json().as_array().unwrap().len(), 1);

    let missing = send(
        &app,
        Method::GET,
        "/api/professionals?search=nobody",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(missing.json(), json!([]));

    let deleted = send(
        &app,
        Method::DELETE,
        &format!("/api/professionals/{id}"),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = send(
        &app,
        Method::DELETE,
        &format!("/api/professionals/{id}"),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_professional_is_not_found() {
    let app = app().await;
    let cookie = register(&app, "admin", "secret1", true)
        .await
        .session_cookie();

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/professionals/{}", uuid::Uuid::new_v4()),
        Some(&cookie),
        Some(json!({ "phoneNumber": "123" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
