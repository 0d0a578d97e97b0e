//! HTTP request handlers.

pub mod auth_handler;
pub mod professional_handler;

pub use auth_handler::{auth_routes, session_routes};
pub use professional_handler::professional_routes;
