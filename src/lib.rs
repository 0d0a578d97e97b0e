//! Professional Directory - session-authenticated directory backend
//!
//! Users register and sign in with a username and password; a signed
//! session cookie then grants access to a searchable directory of
//! professionals, editable by staff.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, professionals, sessions and password hashing
//! - **services**: Authentication and directory use cases
//! - **infra**: Database, repositories and the persistence gateway
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (SESSION_SECRET must be set)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Password, Professional, Session, User};
pub use errors::{AppError, AppResult};
pub use infra::{Persistence, PersistenceGateway};
