//! Allow-list source and cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How an event payload is turned into an identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadEncoding {
    /// The payload is the identity text itself.
    Plain,
    /// The payload is a run of two-digit, 1-based indices into `alphabet`.
    #[default]
    DigitPairs,
}

/// Allow-list cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowListConfig {
    /// Identifier of the event log to read (project id upstream).
    #[serde(default)]
    pub source_id: String,
    /// Logical event name that carries allow-list entries.
    #[serde(default = "default_event_name")]
    pub event_name: String,
    /// Number of most recent events fetched per refresh.
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,
    /// Snapshot time-to-live in seconds.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
    /// Payload encoding.
    #[serde(default)]
    pub encoding: PayloadEncoding,
    /// Alphabet used by [`PayloadEncoding::DigitPairs`].
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Load the first snapshot before the server starts accepting requests.
    #[serde(default = "default_true")]
    pub refresh_on_startup: bool,
}

impl AllowListConfig {
    /// Snapshot time-to-live.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Default for AllowListConfig {
    fn default() -> Self {
        Self {
            source_id: String::new(),
            event_name: default_event_name(),
            fetch_limit: default_fetch_limit(),
            ttl_seconds: default_ttl(),
            encoding: PayloadEncoding::default(),
            alphabet: default_alphabet(),
            refresh_on_startup: default_true(),
        }
    }
}

fn default_event_name() -> String {
    "whitelist".to_string()
}

fn default_fetch_limit() -> u32 {
    100
}

fn default_ttl() -> u64 {
    300
}

fn default_alphabet() -> String {
    "abcdefghijklmnopqrstuvwxyz0123456789-_".to_string()
}

fn default_true() -> bool {
    true
}
