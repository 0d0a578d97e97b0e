//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

use crate::config::Config;
use crate::infra::PersistenceGateway;
use crate::services::{AuthService, Authenticator, ProfessionalManager, ProfessionalService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Professional directory service
    pub professional_service: Arc<dyn ProfessionalService>,
    /// Persistence gateway, kept for health checks
    pub gateway: Arc<dyn PersistenceGateway>,
    /// Signing key for the session cookie
    pub cookie_key: Key,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
}

impl AppState {
    /// Wire the services over a persistence gateway.
    pub fn from_gateway<G>(gateway: Arc<G>, config: &Config) -> Self
    where
        G: PersistenceGateway + 'static,
    {
        Self {
            auth_service: Arc::new(Authenticator::new(gateway.clone(), config.session_ttl())),
            professional_service: Arc::new(ProfessionalManager::new(gateway.clone())),
            gateway,
            cookie_key: Key::derive_from(config.session_secret_bytes()),
            secure_cookies: config.production,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        professional_service: Arc<dyn ProfessionalService>,
        gateway: Arc<dyn PersistenceGateway>,
        cookie_key: Key,
        secure_cookies: bool,
    ) -> Self {
        Self {
            auth_service,
            professional_service,
            gateway,
            cookie_key,
            secure_cookies,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
