//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{session_id, CurrentUser};
use crate::api::AppState;
use crate::config::{SESSION_COOKIE_NAME, SESSION_TTL_HOURS};
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::Registration;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Login name, unique and case-sensitive
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Plain-text password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret1")]
    pub password: String,
    /// Display name
    #[serde(default)]
    #[schema(example = "Alice Bekele")]
    pub full_name: String,
    /// Grants directory edit rights
    #[serde(default)]
    pub is_staff: Option<bool>,
}

/// User login request
///
/// Missing or empty fields are a failed login (401), not a validation error.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Routes that need an authenticated session
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/user", get(current_user))
}

fn session_cookie(state: &AppState, sid: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, sid))
        .http_only(true)
        .secure(state.secure_cookies)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::hours(SESSION_TTL_HOURS))
        .build()
}

/// Register a new user and sign them in
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, session cookie set", body = UserResponse),
        (status = 400, description = "Validation error or username already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, SignedCookieJar, Json<UserResponse>)> {
    let authenticated = state
        .auth_service
        .register(Registration {
            username: payload.username,
            password: payload.password,
            full_name: payload.full_name,
            is_staff: payload.is_staff.unwrap_or(false),
        })
        .await?;

    let jar = jar.add(session_cookie(&state, authenticated.session.id));
    Ok((
        StatusCode::CREATED,
        jar,
        Json(UserResponse::from(authenticated.user)),
    ))
}

/// Login and receive a session cookie
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = UserResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(SignedCookieJar, Json<UserResponse>)> {
    let authenticated = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    let jar = jar.add(session_cookie(&state, authenticated.session.id));
    Ok((jar, Json(UserResponse::from(authenticated.user))))
}

/// Destroy the current session, if any
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Session destroyed and cookie cleared")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(StatusCode, SignedCookieJar)> {
    state.auth_service.logout(session_id(&jar)).await?;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"));
    Ok((StatusCode::OK, jar))
}

/// Get the signed-in user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<UserResponse> {
    Json(user.to_response())
}
