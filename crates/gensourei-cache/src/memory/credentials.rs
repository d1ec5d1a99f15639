//! In-memory credential store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use gensourei_core::error::AppError;
use gensourei_core::result::AppResult;
use gensourei_core::traits::CredentialStore;
use gensourei_core::types::{NewUser, UserId, UserRecord};

/// Credential store held in a concurrent map keyed by lower-cased username.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<DashMap<String, UserRecord>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no account has been stored.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn key(username: &str) -> String {
    username.trim().to_lowercase()
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn insert(&self, user: &NewUser) -> AppResult<UserRecord> {
        // The entry guard holds the shard lock, so check and insert are one step.
        match self.users.entry(key(&user.username)) {
            Entry::Occupied(_) => Err(AppError::already_exists(format!(
                "User '{}' already exists",
                user.username
            ))),
            Entry::Vacant(slot) => {
                let record = UserRecord {
                    id: UserId::new(),
                    username: user.username.clone(),
                    password_hash: user.password_hash.clone(),
                    created_at: Utc::now(),
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn find_by_identity(&self, username: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.users.get(&key(username)).map(|entry| entry.value().clone()))
    }
}
