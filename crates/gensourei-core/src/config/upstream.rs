//! Upstream HTTP endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Endpoints and limits for the event log and identity directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the event log service.
    #[serde(default = "default_log_base_url")]
    pub log_base_url: String,
    /// Base URL of the identity directory.
    #[serde(default = "default_directory_base_url")]
    pub directory_base_url: String,
    /// Per-request timeout in seconds, connect included.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    /// User-Agent sent upstream.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl UpstreamConfig {
    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            log_base_url: default_log_base_url(),
            directory_base_url: default_directory_base_url(),
            request_timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_log_base_url() -> String {
    "https://clouddata.scratch.mit.edu".to_string()
}

fn default_directory_base_url() -> String {
    "https://api.scratch.mit.edu".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("gensourei/", env!("CARGO_PKG_VERSION")).to_string()
}
