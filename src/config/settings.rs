//! Application settings loaded from environment variables.

use std::env;

use chrono::Duration;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, MIN_SESSION_SECRET_LENGTH,
    PRODUCTION_ENV, SESSION_TTL_HOURS,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    session_secret: String,
    pub production: bool,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("session_secret", &"[REDACTED]")
            .field("production", &self.production)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Build a development configuration for the given database and secret.
    ///
    /// # Errors
    /// Returns a configuration error if the secret is shorter than
    /// [`MIN_SESSION_SECRET_LENGTH`] bytes.
    pub fn new(database_url: impl Into<String>, session_secret: impl Into<String>) -> AppResult<Self> {
        let session_secret = session_secret.into();
        validate_secret(&session_secret)?;

        Ok(Self {
            database_url: database_url.into(),
            session_secret,
            production: false,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// `SESSION_SECRET` has no fallback: a missing or short secret aborts
    /// startup instead of signing cookies with a guessable key.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let session_secret = env::var("SESSION_SECRET")
            .map_err(|_| AppError::config("SESSION_SECRET environment variable must be set"))?;

        let mut config = Self::new(Self::database_url_from_env(), session_secret)?;

        config.production = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case(PRODUCTION_ENV))
            .unwrap_or(false);
        if let Ok(host) = env::var("SERVER_HOST") {
            config.server_host = host;
        }
        if let Some(port) = env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()) {
            config.server_port = port;
        }

        Ok(config)
    }

    /// `DATABASE_URL` alone, for commands that never sign cookies.
    pub fn database_url_from_env() -> String {
        dotenvy::dotenv().ok();
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
    }

    /// Mark this configuration as a production deployment.
    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Secret bytes used to derive the cookie signing key.
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }

    /// Fixed session lifetime.
    pub fn session_ttl(&self) -> Duration {
        Duration::hours(SESSION_TTL_HOURS)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn validate_secret(secret: &str) -> AppResult<()> {
    if secret.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(AppError::config(format!(
            "SESSION_SECRET must be at least {} characters long",
            MIN_SESSION_SECRET_LENGTH
        )));
    }
    Ok(())
}
