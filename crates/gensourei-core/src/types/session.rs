//! Server-side session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{SessionId, UserId};

/// A login session bound to a user.
///
/// Lifetime is fixed at creation; activity does not extend it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Session {
    /// Primary key.
    pub id: SessionId,
    /// Owning user.
    pub user_id: UserId,
    /// Login time.
    pub created_at: DateTime<Utc>,
    /// Hard expiry.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session has passed its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Data required to create a session.
///
/// Stores only ever see the hash of the bearer token.
#[derive(Debug, Clone)]
pub struct NewSession {
    /// Owning user.
    pub user_id: UserId,
    /// SHA-256 hex digest of the token handed to the client.
    pub token_hash: String,
    /// Login time.
    pub created_at: DateTime<Utc>,
    /// Hard expiry.
    pub expires_at: DateTime<Utc>,
}
