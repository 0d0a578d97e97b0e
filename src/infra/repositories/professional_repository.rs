//! Professional directory repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::professional::{self, ActiveModel, Entity as ProfessionalEntity};
use crate::domain::{CreateProfessional, Professional, UpdateProfessional};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Professional repository trait for dependency injection.
///
/// Name and title are title-cased on the way in by every write.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    /// List every professional
    async fn list(&self) -> AppResult<Vec<Professional>>;

    /// Substring match on full name or phone number; an empty term lists all
    async fn search(&self, term: &str) -> AppResult<Vec<Professional>>;

    /// Insert a professional
    async fn create(&self, data: CreateProfessional) -> AppResult<Professional>;

    /// Apply a partial update; `None` if the id does not exist
    async fn update(&self, id: Uuid, data: UpdateProfessional) -> AppResult<Option<Professional>>;

    /// Delete by id; `false` if nothing was deleted
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of ProfessionalRepository
pub struct ProfessionalStore {
    db: DatabaseConnection,
}

impl ProfessionalStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfessionalRepository for ProfessionalStore {
    async fn list(&self) -> AppResult<Vec<Professional>> {
        let models = ProfessionalEntity::find()
            .order_by_asc(professional::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Professional::from).collect())
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Professional>> {
        if term.is_empty() {
            return self.list().await;
        }

        let models = ProfessionalEntity::find()
            .filter(
                Condition::any()
                    .add(professional::Column::FullName.contains(term))
                    .add(professional::Column::PhoneNumber.contains(term)),
            )
            .order_by_asc(professional::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Professional::from).collect())
    }

    async fn create(&self, data: CreateProfessional) -> AppResult<Professional> {
        let data = data.normalized();
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(data.full_name),
            professional_title: Set(data.professional_title),
            phone_number: Set(data.phone_number),
            email: Set(data.email),
            company: Set(data.company),
            license_number: Set(data.license_number),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Professional::from(model))
    }

    async fn update(&self, id: Uuid, data: UpdateProfessional) -> AppResult<Option<Professional>> {
        let Some(existing) = ProfessionalEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        else {
            return Ok(None);
        };

        let data = data.normalized();
        let mut active: ActiveModel = existing.into();

        if let Some(full_name) = data.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(title) = data.professional_title {
            active.professional_title = Set(title);
        }
        if let Some(phone_number) = data.phone_number {
            active.phone_number = Set(phone_number);
        }
        if let Some(email) = data.email {
            active.email = Set(Some(email));
        }
        if let Some(company) = data.company {
            active.company = Set(Some(company));
        }
        if let Some(license_number) = data.license_number {
            active.license_number = Set(Some(license_number));
        }
        active.updated_at = Set(chrono::Utc::now());

        updated_or_missing(active.update(&self.db).await)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = ProfessionalEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

/// A row deleted between the lookup and the write reads as missing.
fn updated_or_missing(
    result: Result<professional::Model, DbErr>,
) -> AppResult<Option<Professional>> {
    match result {
        Ok(model) => Ok(Some(Professional::from(model))),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(AppError::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_concurrently_deleted_row_is_missing() {
        let result = updated_or_missing(Err(DbErr::RecordNotUpdated)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_other_update_failures_propagate() {
        let err = updated_or_missing(Err(DbErr::Custom("boom".into()))).unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_updated_row_is_returned() {
        let id = Uuid::new_v4();
        let model = professional::Model {
            id,
            full_name: "Jane Smith".to_string(),
            professional_title: "Site Engineer".to_string(),
            phone_number: "123".to_string(),
            email: None,
            company: None,
            license_number: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let updated = updated_or_missing(Ok(model)).unwrap().unwrap();
        assert_eq!(updated.id, id);
    }
}
