//! Professional service - directory use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateProfessional, Professional, UpdateProfessional};
use crate::errors::{AppResult, OptionExt};
use crate::infra::PersistenceGateway;

/// Professional service trait for dependency injection.
#[async_trait]
pub trait ProfessionalService: Send + Sync {
    /// Search by name or phone; no term lists everything
    async fn search_professionals(&self, term: Option<String>) -> AppResult<Vec<Professional>>;

    /// Add a directory entry
    async fn create_professional(&self, data: CreateProfessional) -> AppResult<Professional>;

    /// Partially update an entry (`NotFound` if missing)
    async fn update_professional(
        &self,
        id: Uuid,
        data: UpdateProfessional,
    ) -> AppResult<Professional>;

    /// Remove an entry (`NotFound` if missing)
    async fn delete_professional(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProfessionalService.
pub struct ProfessionalManager<G: PersistenceGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: PersistenceGateway + ?Sized> ProfessionalManager<G> {
    /// Create new professional service instance
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: PersistenceGateway + ?Sized> ProfessionalService for ProfessionalManager<G> {
    async fn search_professionals(&self, term: Option<String>) -> AppResult<Vec<Professional>> {
        self.gateway
            .professionals()
            .search(term.as_deref().unwrap_or_default())
            .await
    }

    async fn create_professional(&self, data: CreateProfessional) -> AppResult<Professional> {
        let professional = self.gateway.professionals().create(data).await?;
        tracing::info!(professional_id = %professional.id, "Professional created");
        Ok(professional)
    }

    async fn update_professional(
        &self,
        id: Uuid,
        data: UpdateProfessional,
    ) -> AppResult<Professional> {
        self.gateway
            .professionals()
            .update(id, data)
            .await?
            .ok_or_not_found()
    }

    async fn delete_professional(&self, id: Uuid) -> AppResult<()> {
        if self.gateway.professionals().delete(id).await? {
            tracing::info!(professional_id = %id, "Professional deleted");
            Ok(())
        } else {
            Err(crate::errors::AppError::NotFound)
        }
    }
}
