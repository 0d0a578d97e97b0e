//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories and the session store
//! - The persistence gateway tying them together

pub mod db;
pub mod persistence;
pub mod repositories;

pub use db::{Database, MigrationState, Migrator};
pub use persistence::{Persistence, PersistenceGateway};
pub use repositories::{
    ProfessionalRepository, ProfessionalStore, SessionRepository, SessionStore, UserRepository,
    UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProfessionalRepository, MockSessionRepository, MockUserRepository};
