//! Shared fixtures: an in-memory SQLite database behind the real gateway.

#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{ConnectOptions, DatabaseConnection};

use pro_directory::infra::{Database, Persistence};
use pro_directory::Config;

pub const TEST_SECRET: &str = "integration-test-session-secret-0123456789";

/// Single-connection pool so every query sees the same in-memory database.
pub async fn connect() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let connection = sea_orm::Database::connect(options)
        .await
        .expect("connect sqlite");
    let db = Database::from_connection(connection);
    assert_eq!(db.pending_migrations().await.expect("migration status"), 2);
    db.run_migrations().await.expect("run migrations");
    db.get_connection()
}

pub async fn gateway() -> Arc<Persistence> {
    Arc::new(
        Persistence::initialize(connect().await)
            .await
            .expect("initialize gateway"),
    )
}

pub fn config() -> Config {
    Config::new("sqlite::memory:", TEST_SECRET).expect("valid test config")
}
