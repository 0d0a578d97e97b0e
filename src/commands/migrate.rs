//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
///
/// Only the database URL is needed; the session secret is not consulted.
pub async fn execute(args: MigrateArgs, database_url: &str) -> AppResult<()> {
    let db = Database::open(database_url).await?;
    tracing::debug!(action = ?args.action, "Connected for migration");

    match args.action {
        MigrateAction::Up => {
            let pending = db.pending_migrations().await?;
            db.run_migrations().await?;
            tracing::info!(applied = pending, "Migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for state in db.migration_status().await? {
                println!("{}", state);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running migrations");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations completed");
        }
    }

    Ok(())
}
