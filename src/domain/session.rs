//! Authenticated session records.

use rand::{rngs::OsRng, RngCore};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::config::SESSION_ID_BYTES;

/// A server-side session binding a random id to a user id.
///
/// Only the user id is stored; the user itself is re-read on every restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Issue a session for `user_id` expiring `ttl` from now.
    pub fn issue(user_id: Uuid, ttl: Duration) -> Self {
        Self::issue_at(user_id, Utc::now(), ttl)
    }

    /// Issue a session with an explicit issuance time.
    pub fn issue_at(user_id: Uuid, now: DateTime<Utc>, ttl: Duration) -> Self {
        let mut bytes = [0u8; SESSION_ID_BYTES];
        OsRng.fill_bytes(&mut bytes);

        Self {
            id: hex::encode(bytes),
            user_id,
            expires_at: now + ttl,
        }
    }

    /// Check whether the session has lapsed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
