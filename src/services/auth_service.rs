//! Authentication service - registration, login, logout and session restore.
//!
//! Credentials are checked through the `Password` value object; sessions live
//! in the gateway's session store and carry only the user id.

use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

use crate::domain::{NewUser, Password, Session, User};
use crate::errors::{AppError, AppResult};
use crate::infra::PersistenceGateway;

/// Well-formed composite that never matches; verified when the username is
/// unknown so both login failure paths cost one key derivation.
const DUMMY_PASSWORD: &str = concat!(
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    ".",
    "00000000000000000000000000000000"
);

/// Registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub is_staff: bool,
}

/// A user together with the session just issued for them
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub session: Session,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and sign them in
    async fn register(&self, registration: Registration) -> AppResult<AuthenticatedSession>;

    /// Check credentials and issue a session
    async fn login(&self, username: String, password: String) -> AppResult<AuthenticatedSession>;

    /// Destroy the session, if any
    async fn logout(&self, session_id: Option<String>) -> AppResult<()>;

    /// Resolve a session id to its user; `None` for unknown, expired or orphaned sessions
    async fn restore(&self, session_id: &str) -> AppResult<Option<User>>;

    /// Like `restore`, but anonymous callers get `AppError::Unauthorized`
    async fn current_user(&self, session_id: Option<String>) -> AppResult<User> {
        match session_id {
            Some(sid) => self.restore(&sid).await?.ok_or(AppError::Unauthorized),
            None => Err(AppError::Unauthorized),
        }
    }
}

/// Concrete implementation of AuthService over a persistence gateway.
pub struct Authenticator<G: PersistenceGateway + ?Sized> {
    gateway: Arc<G>,
    session_ttl: Duration,
}

impl<G: PersistenceGateway + ?Sized> Authenticator<G> {
    /// Create new auth service instance
    pub fn new(gateway: Arc<G>, session_ttl: Duration) -> Self {
        Self {
            gateway,
            session_ttl,
        }
    }

    async fn establish(&self, user: User) -> AppResult<AuthenticatedSession> {
        let session = Session::issue(user.id, self.session_ttl);
        self.gateway.sessions().create(session.clone()).await?;

        tracing::info!(user_id = %user.id, "Session established");
        Ok(AuthenticatedSession { user, session })
    }
}

#[async_trait]
impl<G: PersistenceGateway + ?Sized> AuthService for Authenticator<G> {
    async fn register(&self, registration: Registration) -> AppResult<AuthenticatedSession> {
        let users = self.gateway.users();

        if users
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username"));
        }

        let password = hash_off_executor(registration.password).await?;
        let user = users
            .create(NewUser {
                username: registration.username,
                password: password.into_string(),
                full_name: registration.full_name,
                is_staff: registration.is_staff,
            })
            .await?;

        self.establish(user).await
    }

    async fn login(&self, username: String, password: String) -> AppResult<AuthenticatedSession> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        let user = self.gateway.users().find_by_username(&username).await?;

        let credential = user.as_ref().map_or_else(
            || Password::from_hash(DUMMY_PASSWORD.to_string()),
            User::credential,
        );
        let password_valid = verify_off_executor(password, credential).await?;

        match user {
            Some(user) if password_valid => self.establish(user).await,
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn logout(&self, session_id: Option<String>) -> AppResult<()> {
        if let Some(sid) = session_id {
            self.gateway.sessions().delete(&sid).await?;
        }
        Ok(())
    }

    async fn restore(&self, session_id: &str) -> AppResult<Option<User>> {
        let sessions = self.gateway.sessions();

        let Some(session) = sessions.find(session_id).await? else {
            return Ok(None);
        };
        if session.is_expired() {
            sessions.delete(&session.id).await?;
            return Ok(None);
        }

        self.gateway.users().find_by_id(session.user_id).await
    }
}

/// Key derivation is CPU and memory heavy; keep it off the async workers.
async fn hash_off_executor(password: String) -> AppResult<Password> {
    tokio::task::spawn_blocking(move || Password::new(&password))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))?
}

async fn verify_off_executor(password: String, credential: Password) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || credential.verify(&password))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))
}
