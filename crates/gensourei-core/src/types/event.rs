//! Event log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry read from the external event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Logical event name.
    pub name: String,
    /// Raw payload, as text.
    pub value: String,
    /// When the upstream recorded the event.
    pub timestamp: DateTime<Utc>,
}
