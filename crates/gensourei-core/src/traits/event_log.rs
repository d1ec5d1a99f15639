//! Source of raw allow-list events.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::LogEvent;

/// Reads the most recent entries of an external event log.
#[async_trait]
pub trait EventLogFetcher: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch at most `limit` events for `source_id`, newest first.
    ///
    /// Any transport, status, or decoding failure is an error; the caller
    /// decides whether a stale view is acceptable.
    async fn fetch(&self, source_id: &str, limit: u32) -> AppResult<Vec<LogEvent>>;
}
