//! Session management configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted session lifetime: one year.
pub const MAX_TTL_HOURS: u64 = 24 * 366;

/// Backend that holds server-side sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStoreKind {
    /// PostgreSQL `sessions` table; survives restarts.
    #[default]
    Database,
    /// In-process moka cache; lost on restart.
    Memory,
}

impl std::fmt::Display for SessionStoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStoreKind::Database => write!(f, "database"),
            SessionStoreKind::Memory => write!(f, "memory"),
        }
    }
}

/// Session lifetime and cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where sessions are stored.
    #[serde(default)]
    pub store: SessionStoreKind,
    /// Fixed session lifetime in hours, counted from login.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
    /// Upper bound on sessions kept by the in-memory store.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the cookie `Secure`.
    #[serde(default = "default_true")]
    pub cookie_secure: bool,
    /// `SameSite` attribute: `"none"`, `"lax"` or `"strict"`.
    #[serde(default = "default_same_site")]
    pub cookie_same_site: String,
}

impl SessionConfig {
    /// Session lifetime as a chrono duration, clamped to [`MAX_TTL_HOURS`].
    pub fn ttl(&self) -> chrono::Duration {
        let hours = self.ttl_hours.min(MAX_TTL_HOURS) as i64;
        chrono::Duration::try_hours(hours).unwrap_or(chrono::Duration::zero())
    }

    /// Reject lifetimes outside `1..=MAX_TTL_HOURS`.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.ttl_hours == 0 || self.ttl_hours > MAX_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "session.ttl_hours must be between 1 and {MAX_TTL_HOURS}, got {}",
                self.ttl_hours
            )));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store: SessionStoreKind::default(),
            ttl_hours: default_ttl_hours(),
            max_capacity: default_max_capacity(),
            cookie_name: default_cookie_name(),
            cookie_secure: default_true(),
            cookie_same_site: default_same_site(),
        }
    }
}

fn default_ttl_hours() -> u64 {
    24
}

fn default_max_capacity() -> u64 {
    100_000
}

fn default_cookie_name() -> String {
    "gensourei.sid".to_string()
}

fn default_true() -> bool {
    true
}

fn default_same_site() -> String {
    "none".to_string()
}
