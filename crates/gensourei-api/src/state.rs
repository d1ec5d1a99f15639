//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use gensourei_auth::{AllowListCache, RegistrationGate, SessionAuthenticator};
use gensourei_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Allow-list cache, shared with the registration gate and the worker
    pub allowlist: Arc<AllowListCache>,
    /// Registration pipeline
    pub registration: Arc<RegistrationGate>,
    /// Login and session lookup
    pub authenticator: Arc<SessionAuthenticator>,
}
