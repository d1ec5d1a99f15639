//! Event log reader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use gensourei_core::error::{AppError, ErrorKind};
use gensourei_core::result::AppResult;
use gensourei_core::traits::EventLogFetcher;
use gensourei_core::types::LogEvent;

use crate::client::trim_base;

/// Reads `GET {base}/logs?projectid=..&limit=..&offset=0`.
#[derive(Debug, Clone)]
pub struct HttpEventLogFetcher {
    client: Client,
    base_url: String,
}

/// One entry as the log serves it.
#[derive(Debug, Deserialize)]
struct WireEvent {
    name: String,
    value: serde_json::Value,
    /// Milliseconds since the Unix epoch.
    timestamp: i64,
}

impl WireEvent {
    fn into_event(self) -> Option<LogEvent> {
        let value = match self.value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                debug!(name = %self.name, value = %other, "Skipping event with non-scalar value");
                return None;
            }
        };
        let timestamp = DateTime::<Utc>::from_timestamp_millis(self.timestamp)?;
        Some(LogEvent {
            name: self.name,
            value,
            timestamp,
        })
    }
}

impl HttpEventLogFetcher {
    /// Create a fetcher against `base_url`.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl EventLogFetcher for HttpEventLogFetcher {
    async fn fetch(&self, source_id: &str, limit: u32) -> AppResult<Vec<LogEvent>> {
        let url = format!("{}/logs", trim_base(&self.base_url));
        let limit = limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("projectid", source_id),
                ("limit", limit.as_str()),
                ("offset", "0"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::UpstreamUnavailable,
                    format!("Event log request failed: {e}"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(AppError::upstream_unavailable(format!(
                "Event log returned HTTP {}",
                response.status()
            )));
        }

        let wire: Vec<WireEvent> = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::UpstreamUnavailable,
                format!("Event log returned an unreadable body: {e}"),
                e,
            )
        })?;

        let events: Vec<LogEvent> = wire.into_iter().filter_map(WireEvent::into_event).collect();
        debug!(source_id, count = events.len(), "Fetched event log");
        Ok(events)
    }
}
