//! Periodic allow-list refresh.

use std::sync::Arc;

use gensourei_auth::{AllowListCache, RefreshOutcome};

/// Keeps the allow-list warm so request-path refreshes are rare.
#[derive(Debug, Clone)]
pub struct AllowListRefreshJob {
    cache: Arc<AllowListCache>,
}

impl AllowListRefreshJob {
    /// Create a refresh job over `cache`.
    pub fn new(cache: Arc<AllowListCache>) -> Self {
        Self { cache }
    }

    /// Run one refresh. Failures are logged by the cache.
    pub async fn run(&self) -> RefreshOutcome {
        tracing::debug!("Running scheduled allow-list refresh");
        self.cache.force_refresh().await
    }
}
