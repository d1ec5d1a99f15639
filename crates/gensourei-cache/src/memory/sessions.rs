//! In-memory session store using the moka crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache;
use tracing::debug;

use gensourei_core::config::SessionConfig;
use gensourei_core::result::AppResult;
use gensourei_core::traits::SessionStore;
use gensourei_core::types::{NewSession, Session, SessionId};

/// Session store backed by a moka cache keyed by token hash.
///
/// Entries are evicted by moka once the session lifetime has passed, and
/// `purge_expired` drops anything whose `expires_at` is already behind.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    cache: Cache<String, Session>,
}

impl MemorySessionStore {
    /// Create a new store sized and timed from configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let ttl = config
            .ttl()
            .to_std()
            .unwrap_or(std::time::Duration::from_secs(config.ttl_hours * 3600));

        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, session: &NewSession) -> AppResult<Session> {
        let record = Session {
            id: SessionId::new(),
            user_id: session.user_id,
            created_at: session.created_at,
            expires_at: session.expires_at,
        };
        self.cache
            .insert(session.token_hash.clone(), record.clone())
            .await;
        Ok(record)
    }

    async fn get(&self, token_hash: &str) -> AppResult<Option<Session>> {
        Ok(self.cache.get(token_hash).await)
    }

    async fn destroy(&self, token_hash: &str) -> AppResult<()> {
        self.cache.invalidate(token_hash).await;
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let expired: Vec<String> = self
            .cache
            .iter()
            .filter(|(_, session)| session.is_expired_at(now))
            .map(|(key, _)| key.as_ref().clone())
            .collect();

        for key in &expired {
            self.cache.invalidate(key).await;
        }

        debug!(count = expired.len(), "Purged expired in-memory sessions");
        Ok(expired.len() as u64)
    }
}
