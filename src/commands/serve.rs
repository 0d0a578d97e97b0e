//! Serve command - Starts the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, SESSION_PRUNE_INTERVAL_SECONDS};
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence, PersistenceGateway};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize database (applies pending migrations)
    let db = Database::connect(&config).await?;

    // Build the gateway; provisions the session table if missing
    let gateway = Arc::new(Persistence::initialize(db.get_connection()).await?);
    tracing::info!("Persistence gateway ready");

    spawn_session_pruner(gateway.clone());

    let app = create_router(AppState::from_gateway(gateway, &config));

    // Start server
    let host = args.host.unwrap_or_else(|| config.server_host.clone());
    let port = args.port.unwrap_or(config.server_port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!(secure_cookies = config.production, "Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Periodically delete expired sessions for the lifetime of the process.
fn spawn_session_pruner(gateway: Arc<Persistence>) {
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(Duration::from_secs(SESSION_PRUNE_INTERVAL_SECONDS));
        loop {
            interval.tick().await;
            match gateway.sessions().prune_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "Pruned expired sessions"),
                Err(e) => tracing::warn!(error = %e, "Session pruning failed"),
            }
        }
    });
}
