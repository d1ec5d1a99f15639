//! External identity types.

use serde::{Deserialize, Serialize};

/// Raw profile returned by the identity directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryProfile {
    /// Directory-side numeric id.
    pub id: i64,
    /// Username in its canonical casing.
    pub username: String,
    /// Whether the directory marks this account as staff/trusted.
    #[serde(default)]
    pub trusted: bool,
}

/// An identity confirmed to exist by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    /// Directory-side id.
    pub id: i64,
    /// Canonical username; this is what gets persisted.
    pub canonical_username: String,
    /// Informational only.
    pub trusted: bool,
}

impl From<DirectoryProfile> for ExternalIdentity {
    fn from(profile: DirectoryProfile) -> Self {
        Self {
            id: profile.id,
            canonical_username: profile.username,
            trusted: profile.trusted,
        }
    }
}
