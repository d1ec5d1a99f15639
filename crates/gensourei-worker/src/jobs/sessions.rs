//! Expired-session purge.

use std::sync::Arc;

use gensourei_auth::SessionAuthenticator;
use gensourei_core::result::AppResult;

/// Deletes sessions whose expiry has passed.
#[derive(Debug, Clone)]
pub struct SessionPurgeJob {
    authenticator: Arc<SessionAuthenticator>,
}

impl SessionPurgeJob {
    /// Create a purge job over `authenticator`.
    pub fn new(authenticator: Arc<SessionAuthenticator>) -> Self {
        Self { authenticator }
    }

    /// Run one purge, returning the number of sessions removed.
    pub async fn run(&self) -> AppResult<u64> {
        tracing::info!("Running session purge");
        let count = self.authenticator.purge_expired().await?;
        tracing::info!("Purged {} expired sessions", count);
        Ok(count)
    }
}
