//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Scheduled background task configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the scheduler runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression (with seconds) for purging expired sessions.
    #[serde(default = "default_session_purge")]
    pub session_purge_cron: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            session_purge_cron: default_session_purge(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_session_purge() -> String {
    "0 */15 * * * *".to_string()
}
