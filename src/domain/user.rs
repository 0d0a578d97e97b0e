//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Password;

/// User domain entity.
///
/// Deliberately not `Serialize`: responses go through [`UserResponse`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Composite `"<keyHex>.<saltHex>"`
    pub password: String,
    pub full_name: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Stored credential as a value object
    pub fn credential(&self) -> Password {
        Password::from_hash(self.password.clone())
    }

    /// Project the public view of this user
    pub fn to_response(&self) -> UserResponse {
        UserResponse::from(self)
    }
}

/// Fields for inserting a user; the password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub is_staff: bool,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Login name
    #[schema(example = "alice")]
    pub username: String,
    /// Display name
    #[schema(example = "Alice Bekele")]
    pub full_name: String,
    /// Staff members may edit the directory
    #[schema(example = false)]
    pub is_staff: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            is_staff: user.is_staff,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            is_staff: user.is_staff,
        }
    }
}
