//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They reach storage only through the
//! `PersistenceGateway` they are constructed with.

mod auth_service;
mod professional_service;

#[cfg(test)]
mod test_support;

pub use auth_service::{AuthService, AuthenticatedSession, Authenticator, Registration};
pub use professional_service::{ProfessionalManager, ProfessionalService};
