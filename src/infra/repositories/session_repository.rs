//! Durable session store backed by the `user_sessions` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Schema, Set,
};

use super::entities::session::{self, ActiveModel, Entity as SessionEntity};
use crate::config::SESSION_TABLE_NAME;
use crate::domain::Session;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session store trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Create the backing table and its expiry index if missing
    async fn ensure_table(&self) -> AppResult<()>;

    /// Persist a freshly issued session
    async fn create(&self, session: Session) -> AppResult<()>;

    /// Load a session by id, expired or not
    async fn find(&self, sid: &str) -> AppResult<Option<Session>>;

    /// Remove a session; removing an unknown id is not an error
    async fn delete(&self, sid: &str) -> AppResult<()>;

    /// Remove every session that lapsed before `now`, returning the count
    async fn prune_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}

/// Concrete implementation of SessionRepository
pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn ensure_table(&self) -> AppResult<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(SessionEntity);
        table.if_not_exists();
        self.db.execute(backend.build(&table)).await?;

        for mut index in schema.create_index_from_entity(SessionEntity) {
            index.if_not_exists();
            self.db.execute(backend.build(&index)).await?;
        }

        tracing::debug!("Session table {} ready", SESSION_TABLE_NAME);
        Ok(())
    }

    async fn create(&self, session: Session) -> AppResult<()> {
        let active_model = ActiveModel {
            sid: Set(session.id),
            user_id: Set(session.user_id),
            expires_at: Set(session.expires_at),
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn find(&self, sid: &str) -> AppResult<Option<Session>> {
        let result = SessionEntity::find_by_id(sid.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Session::from))
    }

    async fn delete(&self, sid: &str) -> AppResult<()> {
        SessionEntity::delete_by_id(sid.to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn prune_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = SessionEntity::delete_many()
            .filter(session::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::EntityName;

    use super::*;

    #[test]
    fn test_entity_uses_session_table() {
        assert_eq!(SessionEntity.table_name(), SESSION_TABLE_NAME);
    }
}
