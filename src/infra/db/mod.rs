//! Datastore connection pool and schema migrations.

use std::fmt;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use crate::config::{Config, DB_CONNECT_TIMEOUT_SECONDS, DB_MAX_CONNECTIONS};

pub mod migrations;

pub use migrations::Migrator;

/// One row of `migrate status` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.applied { "applied" } else { "pending" };
        write!(f, "{}: {}", self.name, state)
    }
}

/// Pooled connection to the relational store
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool and bring the schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let db = Self::open(&config.database_url).await?;

        let pending = db.pending_migrations().await?;
        Migrator::up(&db.connection, None).await?;
        tracing::info!(applied = pending, "Database connected, schema up to date");

        Ok(db)
    }

    /// Open the pool without touching the schema (for `migrate`).
    pub async fn open(database_url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(database_url.to_string());
        options
            .max_connections(DB_MAX_CONNECTIONS)
            .connect_timeout(Duration::from_secs(DB_CONNECT_TIMEOUT_SECONDS))
            .acquire_timeout(Duration::from_secs(DB_CONNECT_TIMEOUT_SECONDS));

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Wrap an existing connection
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Revert the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Drop everything and re-apply all migrations.
    ///
    /// The session table goes too; the gateway recreates it on next start.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Every known migration in order, with whether it has been applied.
    pub async fn migration_status(&self) -> Result<Vec<MigrationState>, DbErr> {
        let applied = self.applied_versions().await?;

        Ok(Migrator::migrations()
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: applied.iter().any(|v| v == m.name()),
            })
            .collect())
    }

    /// Number of migrations not yet applied
    pub async fn pending_migrations(&self) -> Result<usize, DbErr> {
        Ok(self
            .migration_status()
            .await?
            .iter()
            .filter(|m| !m.applied)
            .count())
    }

    async fn applied_versions(&self) -> Result<Vec<String>, DbErr> {
        // The bookkeeping table only exists after the first `up`
        match seaql_migrations::Entity::find().all(&self.connection).await {
            Ok(rows) => Ok(rows.into_iter().map(|m| m.version).collect()),
            Err(DbErr::Exec(_)) | Err(DbErr::Query(_)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}
