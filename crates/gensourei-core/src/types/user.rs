//! Account records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A persisted account.
///
/// Created only by a successful registration and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UserRecord {
    /// Primary key.
    pub id: UserId,
    /// Canonical username; unique case-insensitively.
    pub username: String,
    /// Argon2id PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Canonical username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
