//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gensourei_auth::RefreshOutcome;
use gensourei_core::types::{AllowListStatus, UserId};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response. The token itself travels in the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Logged-in user.
    pub user_id: UserId,
    /// When the session ends.
    pub expires_at: DateTime<Utc>,
}

/// Body of `GET /api/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Whether the cookie resolves to a live session.
    pub logged_in: bool,
    /// Session owner when logged in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// Allow-list diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowListResponse {
    /// Number of entries.
    pub count: usize,
    /// When the snapshot was fetched.
    pub last_updated: Option<DateTime<Utc>>,
    /// Sorted entries.
    pub members: Vec<String>,
}

impl From<AllowListStatus> for AllowListResponse {
    fn from(status: AllowListStatus) -> Self {
        Self {
            count: status.count,
            last_updated: status.last_updated,
            members: status
                .members
                .into_iter()
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}

/// Result of a forced allow-list refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowListRefreshResponse {
    /// `replaced`, `superseded`, or `failed`.
    pub outcome: String,
    /// Status after the refresh.
    #[serde(flatten)]
    pub status: AllowListResponse,
}

impl AllowListRefreshResponse {
    /// Combine a refresh outcome with the status that followed it.
    pub fn new(outcome: RefreshOutcome, status: AllowListStatus) -> Self {
        let outcome = match outcome {
            RefreshOutcome::Replaced { .. } => "replaced",
            RefreshOutcome::Superseded => "superseded",
            RefreshOutcome::Failed => "failed",
        };
        Self {
            outcome: outcome.to_string(),
            status: status.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
