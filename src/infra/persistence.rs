//! Persistence gateway - the single entry point to stored state.
//!
//! Constructed explicitly at startup and handed to the services, so tests
//! can swap in mocked repositories.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use std::sync::Arc;

use super::repositories::{
    ProfessionalRepository, ProfessionalStore, SessionRepository, SessionStore, UserRepository,
    UserStore,
};
use crate::errors::AppResult;

/// Persistence gateway trait for dependency injection.
///
/// Every repository call is a single statement batch; nothing spans calls.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get professional repository
    fn professionals(&self) -> Arc<dyn ProfessionalRepository>;

    /// Get session store
    fn sessions(&self) -> Arc<dyn SessionRepository>;

    /// Check datastore connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of PersistenceGateway
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    professional_repo: Arc<ProfessionalStore>,
    session_store: Arc<SessionStore>,
}

impl Persistence {
    /// Build the gateway and provision the session table if it is missing.
    pub async fn initialize(db: DatabaseConnection) -> AppResult<Self> {
        let session_store = Arc::new(SessionStore::new(db.clone()));
        session_store.ensure_table().await?;

        Ok(Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            professional_repo: Arc::new(ProfessionalStore::new(db.clone())),
            session_store,
            db,
        })
    }
}

#[async_trait]
impl PersistenceGateway for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn professionals(&self) -> Arc<dyn ProfessionalRepository> {
        self.professional_repo.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.session_store.clone()
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
