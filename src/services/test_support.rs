//! Gateway double wrapping mocked repositories.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::AppResult;
use crate::infra::{
    MockProfessionalRepository, MockSessionRepository, MockUserRepository,
    PersistenceGateway, ProfessionalRepository, SessionRepository, UserRepository,
};

pub(crate) struct TestGateway {
    users: Arc<MockUserRepository>,
    professionals: Arc<MockProfessionalRepository>,
    sessions: Arc<MockSessionRepository>,
}

impl TestGateway {
    pub(crate) fn new(users: MockUserRepository, sessions: MockSessionRepository) -> Self {
        Self {
            users: Arc::new(users),
            professionals: Arc::new(MockProfessionalRepository::new()),
            sessions: Arc::new(sessions),
        }
    }

    pub(crate) fn with_professionals(professionals: MockProfessionalRepository) -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            professionals: Arc::new(professionals),
            sessions: Arc::new(MockSessionRepository::new()),
        }
    }
}

#[async_trait]
impl PersistenceGateway for TestGateway {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn professionals(&self) -> Arc<dyn ProfessionalRepository> {
        self.professionals.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.sessions.clone()
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
