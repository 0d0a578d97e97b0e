//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod password;
pub mod professional;
pub mod session;
pub mod user;

pub use password::{hash_password, verify_password, Password};
pub use professional::{capitalize_words, CreateProfessional, Professional, UpdateProfessional};
pub use session::Session;
pub use user::{NewUser, User, UserResponse};
