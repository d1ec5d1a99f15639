//! Public identity directory client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use gensourei_core::error::{AppError, ErrorKind};
use gensourei_core::result::AppResult;
use gensourei_core::traits::IdentityDirectory;
use gensourei_core::types::DirectoryProfile;

use crate::client::trim_base;

/// Looks identities up with `GET {base}/users/{username}`.
#[derive(Debug, Clone)]
pub struct HttpIdentityDirectory {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WireProfile {
    id: i64,
    username: String,
    #[serde(default, alias = "scratchteam")]
    trusted: bool,
}

impl From<WireProfile> for DirectoryProfile {
    fn from(wire: WireProfile) -> Self {
        Self {
            id: wire.id,
            username: wire.username,
            trusted: wire.trusted,
        }
    }
}

impl HttpIdentityDirectory {
    /// Create a directory client against `base_url`.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl IdentityDirectory for HttpIdentityDirectory {
    async fn lookup(&self, username: &str) -> AppResult<Option<DirectoryProfile>> {
        // Directory usernames are restricted to URL-safe characters; anything
        // else cannot exist there.
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Ok(None);
        }

        let url = format!("{}/users/{}", trim_base(&self.base_url), username);
        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::UpstreamUnavailable,
                format!("Identity directory request failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            if status != StatusCode::NOT_FOUND {
                debug!(username, %status, "Identity directory answered with non-success status");
            }
            return Ok(None);
        }

        match response.json::<WireProfile>().await {
            Ok(profile) => Ok(Some(profile.into())),
            Err(e) => {
                debug!(username, error = %e, "Identity directory body was not a profile");
                Ok(None)
            }
        }
    }
}
