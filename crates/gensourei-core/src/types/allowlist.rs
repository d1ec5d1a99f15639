//! Allow-list domain types.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized allow-list entry: trimmed and lower-cased.
///
/// Equality on this type is the case-insensitive comparison used for every
/// allow-list membership check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedIdentity(String);

impl AllowedIdentity {
    /// Normalize a raw identity. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// The normalized form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AllowedIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable point-in-time view of the allow-list.
///
/// Snapshots are never edited; a refresh builds a new one and swaps it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListSnapshot {
    entries: HashSet<AllowedIdentity>,
    fetched_at: DateTime<Utc>,
}

impl AllowListSnapshot {
    /// Build a snapshot from decoded entries. Duplicates collapse.
    pub fn new(entries: impl IntoIterator<Item = AllowedIdentity>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fetched_at,
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, identity: &str) -> bool {
        AllowedIdentity::new(identity).is_some_and(|id| self.entries.contains(&id))
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the underlying log was read.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Entries in sorted order.
    pub fn members(&self) -> Vec<AllowedIdentity> {
        let mut members: Vec<_> = self.entries.iter().cloned().collect();
        members.sort();
        members
    }
}

/// Diagnostic view of the allow-list cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowListStatus {
    /// Number of entries in the current snapshot.
    pub count: usize,
    /// When the current snapshot was fetched; `None` before the first load.
    pub last_updated: Option<DateTime<Utc>>,
    /// Sorted entries.
    pub members: Vec<AllowedIdentity>,
}

impl AllowListStatus {
    /// Status reported before any snapshot has been loaded.
    pub fn unloaded() -> Self {
        Self {
            count: 0,
            last_updated: None,
            members: Vec::new(),
        }
    }
}

impl From<&AllowListSnapshot> for AllowListStatus {
    fn from(snapshot: &AllowListSnapshot) -> Self {
        Self {
            count: snapshot.len(),
            last_updated: Some(snapshot.fetched_at()),
            members: snapshot.members(),
        }
    }
}
