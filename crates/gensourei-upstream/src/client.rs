//! Shared HTTP client construction.

use reqwest::Client;
use tracing::info;

use gensourei_core::config::UpstreamConfig;
use gensourei_core::error::{AppError, ErrorKind};
use gensourei_core::result::AppResult;

/// Build the HTTP client shared by every upstream provider.
///
/// Every request made through it is bounded by the configured timeout.
pub fn build_client(config: &UpstreamConfig) -> AppResult<Client> {
    info!(
        timeout_seconds = config.request_timeout_seconds,
        user_agent = %config.user_agent,
        "Building upstream HTTP client"
    );

    Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to build upstream HTTP client: {e}"),
                e,
            )
        })
}

/// Strip trailing slashes so paths can be appended with `/`.
pub(crate) fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}
