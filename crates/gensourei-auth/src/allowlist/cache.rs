//! TTL-bounded cache of the current allow-list.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use gensourei_core::config::AllowListConfig;
use gensourei_core::error::AppError;
use gensourei_core::result::AppResult;
use gensourei_core::traits::EventLogFetcher;
use gensourei_core::types::{AllowListSnapshot, AllowListStatus, LogEvent};

use super::decoder::{PayloadDecoder, matches_signal};

/// What a refresh did to the cached snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new snapshot with this many entries is now current.
    Replaced {
        /// Entries in the new snapshot.
        entries: usize,
    },
    /// The fetch succeeded but a newer fetch had already been swapped in.
    Superseded,
    /// The fetch failed; the previous snapshot, if any, stays current.
    Failed,
}

#[derive(Debug)]
struct CachedSnapshot {
    snapshot: Arc<AllowListSnapshot>,
    loaded_at: Instant,
    /// Order in which the fetch behind this snapshot was started.
    sequence: u64,
}

/// Holds the allow-list and keeps it no older than its TTL.
///
/// The lock guards only the pointer to the current snapshot; fetching and
/// decoding happen outside it. Each fetch takes a sequence number when it
/// starts and a finished fetch only replaces a snapshot with a lower one.
#[derive(Debug)]
pub struct AllowListCache {
    fetcher: Arc<dyn EventLogFetcher>,
    decoder: PayloadDecoder,
    source_id: String,
    event_name: String,
    fetch_limit: u32,
    ttl: Duration,
    current: RwLock<Option<CachedSnapshot>>,
    next_sequence: AtomicU64,
}

impl AllowListCache {
    /// Create an empty cache. Nothing is fetched until the first check or
    /// an explicit refresh.
    pub fn new(fetcher: Arc<dyn EventLogFetcher>, config: &AllowListConfig) -> Self {
        Self {
            fetcher,
            decoder: PayloadDecoder::from_config(config),
            source_id: config.source_id.clone(),
            event_name: config.event_name.clone(),
            fetch_limit: config.fetch_limit,
            ttl: config.ttl(),
            current: RwLock::new(None),
            next_sequence: AtomicU64::new(1),
        }
    }

    /// Configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Case-insensitive membership test.
    ///
    /// Refreshes first when the snapshot is older than the TTL. A failed
    /// refresh is absorbed and the stale snapshot answers. Only when no
    /// snapshot was ever loaded does this return
    /// [`ErrorKind::UpstreamUnavailable`](gensourei_core::ErrorKind::UpstreamUnavailable).
    pub async fn is_allowed(&self, identity: &str) -> AppResult<bool> {
        if self.is_stale().await {
            self.refresh().await;
        }

        match self.snapshot().await {
            Some(snapshot) => Ok(snapshot.contains(identity)),
            None => Err(AppError::upstream_unavailable(
                "Allow-list has not been loaded and the event log is unreachable",
            )),
        }
    }

    /// Fetch the event log and swap in a new snapshot.
    ///
    /// Never fails: on error the current snapshot stays authoritative.
    pub async fn refresh(&self) -> RefreshOutcome {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);

        let events = match self
            .fetcher
            .fetch(&self.source_id, self.fetch_limit)
            .await
        {
            Ok(events) => events,
            Err(e) => {
                warn!(
                    source_id = %self.source_id,
                    error = %e,
                    "Allow-list refresh failed, keeping previous snapshot"
                );
                return RefreshOutcome::Failed;
            }
        };

        let snapshot = Arc::new(self.build_snapshot(&events));
        let entries = snapshot.len();

        let mut current = self.current.write().await;
        if current.as_ref().is_some_and(|c| c.sequence > sequence) {
            debug!(sequence, "Discarding allow-list fetch superseded by a newer one");
            return RefreshOutcome::Superseded;
        }
        *current = Some(CachedSnapshot {
            snapshot,
            loaded_at: Instant::now(),
            sequence,
        });
        drop(current);

        info!(
            source_id = %self.source_id,
            events = events.len(),
            entries,
            "Allow-list refreshed"
        );
        RefreshOutcome::Replaced { entries }
    }

    /// Refresh regardless of the snapshot's age.
    pub async fn force_refresh(&self) -> RefreshOutcome {
        debug!("Forced allow-list refresh");
        self.refresh().await
    }

    /// Current snapshot, if one was ever loaded.
    pub async fn snapshot(&self) -> Option<Arc<AllowListSnapshot>> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|c| Arc::clone(&c.snapshot))
    }

    /// Size, age, and sorted members of the current snapshot.
    pub async fn inspect(&self) -> AllowListStatus {
        match self.snapshot().await {
            Some(snapshot) => AllowListStatus::from(snapshot.as_ref()),
            None => AllowListStatus::unloaded(),
        }
    }

    async fn is_stale(&self) -> bool {
        match self.current.read().await.as_ref() {
            Some(cached) => cached.loaded_at.elapsed() >= self.ttl,
            None => true,
        }
    }

    fn build_snapshot(&self, events: &[LogEvent]) -> AllowListSnapshot {
        let entries = events
            .iter()
            .filter(|event| matches_signal(&event.name, &self.event_name))
            .filter_map(|event| {
                let decoded = self.decoder.decode(&event.value);
                if decoded.is_none() {
                    debug!(name = %event.name, value = %event.value, "Skipping undecodable allow-list payload");
                }
                decoded
            });
        AllowListSnapshot::new(entries, Utc::now())
    }
}
