//! Server-side session persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;
use crate::types::{NewSession, Session};

/// Stores sessions keyed by the hash of their bearer token.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new session.
    async fn create(&self, session: &NewSession) -> AppResult<Session>;

    /// Look up a session by token hash. Expiry is checked by the caller.
    async fn get(&self, token_hash: &str) -> AppResult<Option<Session>>;

    /// Remove a session. Removing an unknown session is not an error.
    async fn destroy(&self, token_hash: &str) -> AppResult<()>;

    /// Remove every session that expired at or before `now`.
    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}
