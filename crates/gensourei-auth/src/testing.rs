//! Fakes shared by the unit tests in this crate.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use gensourei_cache::MemoryCredentialStore;
use gensourei_core::config::AuthConfig;
use gensourei_core::error::AppError;
use gensourei_core::result::AppResult;
use gensourei_core::traits::{CredentialStore, EventLogFetcher, IdentityDirectory};
use gensourei_core::types::{DirectoryProfile, LogEvent, NewUser, UserRecord};

/// Argon2 parameters cheap enough for tests.
pub fn fast_auth_config() -> AuthConfig {
    AuthConfig {
        hash_memory_kib: 256,
        hash_iterations: 1,
        hash_parallelism: 1,
        ..AuthConfig::default()
    }
}

/// Plain-encoded `whitelist` event.
pub fn whitelist_event(value: &str) -> LogEvent {
    LogEvent {
        name: "☁ whitelist".to_string(),
        value: value.to_string(),
        timestamp: Utc::now(),
    }
}

/// Event log serving a mutable list of events.
#[derive(Debug, Default)]
pub struct FakeEventLog {
    events: Mutex<Vec<LogEvent>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeEventLog {
    pub fn with_members(members: &[&str]) -> Arc<Self> {
        let log = Self::default();
        *log.events.try_lock().unwrap() = members.iter().map(|m| whitelist_event(m)).collect();
        Arc::new(log)
    }

    pub async fn set_members(&self, members: &[&str]) {
        *self.events.lock().await = members.iter().map(|m| whitelist_event(m)).collect();
    }

    pub async fn set_events(&self, events: Vec<LogEvent>) {
        *self.events.lock().await = events;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventLogFetcher for FakeEventLog {
    async fn fetch(&self, _source_id: &str, limit: u32) -> AppResult<Vec<LogEvent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::upstream_unavailable("event log is down"));
        }
        let events = self.events.lock().await;
        Ok(events.iter().take(limit as usize).cloned().collect())
    }
}

/// Directory knowing a fixed set of canonical usernames.
#[derive(Debug, Default)]
pub struct FakeDirectory {
    known: HashMap<String, String>,
    rename_to: Option<String>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn knowing(usernames: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            known: usernames
                .iter()
                .map(|u| (u.to_lowercase(), u.to_string()))
                .collect(),
            ..Self::default()
        })
    }

    /// Directory answering every lookup with `canonical`.
    pub fn renaming(canonical: &str) -> Arc<Self> {
        Arc::new(Self {
            rename_to: Some(canonical.to_string()),
            ..Self::default()
        })
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityDirectory for FakeDirectory {
    async fn lookup(&self, username: &str) -> AppResult<Option<DirectoryProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::upstream_unavailable("directory is down"));
        }
        Ok(self
            .rename_to
            .as_ref()
            .or_else(|| self.known.get(&username.to_lowercase()))
            .map(|canonical| DirectoryProfile {
                id: 1,
                username: canonical.clone(),
                trusted: false,
            }))
    }
}

/// Memory credential store that counts every call.
#[derive(Debug, Default)]
pub struct CountingCredentials {
    inner: MemoryCredentialStore,
    calls: AtomicUsize,
}

impl CountingCredentials {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl CredentialStore for CountingCredentials {
    async fn insert(&self, user: &NewUser) -> AppResult<UserRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(user).await
    }

    async fn find_by_identity(&self, username: &str) -> AppResult<Option<UserRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_identity(username).await
    }
}
