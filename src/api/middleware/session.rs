//! Session cookie authentication middleware.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::User;
use crate::errors::AppError;

/// Authenticated user restored from the session cookie
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Check if user may edit the directory.
    pub fn is_staff(&self) -> bool {
        self.0.is_staff
    }
}

/// Session id carried by a correctly signed `sid` cookie.
pub fn session_id(jar: &SignedCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

/// Session authentication middleware.
///
/// Restores the user bound to the session cookie and injects the
/// CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = state.auth_service.current_user(session_id(&jar)).await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Require the staff flag, returns Forbidden error otherwise.
pub fn require_staff(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_staff() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Extractor for staff-only handlers.
///
/// Place it before any body extractor: a non-staff caller is refused with
/// 403 before the body is parsed or validated.
#[derive(Clone, Debug)]
pub struct StaffUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for StaffUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let current = parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)?;
        require_staff(&current)?;

        Ok(StaffUser(current.0))
    }
}
