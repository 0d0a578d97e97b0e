//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, professional_handler};
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::{CreateProfessional, Professional, UpdateProfessional, UserResponse};

/// OpenAPI documentation for the professional directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Professional Directory API",
        version = "0.1.0",
        description = "Session-authenticated directory of construction professionals",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::current_user,
        // Directory endpoints
        professional_handler::list_professionals,
        professional_handler::create_professional,
        professional_handler::update_professional,
        professional_handler::delete_professional,
    ),
    components(
        schemas(
            UserResponse,
            Professional,
            CreateProfessional,
            UpdateProfessional,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and sessions"),
        (name = "Professionals", description = "Directory management")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the session cookie
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE_NAME,
                    "Signed session id set by /api/login or /api/register",
                ))),
            );
        }
    }
}
