//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;

use gensourei_api::AppState;
use gensourei_auth::{
    AllowListCache, IdentitySource, PasswordHasher, RegistrationGate, SessionAuthenticator,
};
use gensourei_cache::{MemoryCredentialStore, MemorySessionStore};
use gensourei_core::config::{AppConfig, PayloadEncoding, SessionStoreKind};
use gensourei_core::error::AppError;
use gensourei_core::result::AppResult;
use gensourei_core::traits::{EventLogFetcher, IdentityDirectory};
use gensourei_core::types::{DirectoryProfile, LogEvent};

/// Event log serving whatever events the test puts in it.
#[derive(Debug, Default)]
pub struct FakeEventLog {
    events: Mutex<Vec<LogEvent>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeEventLog {
    pub async fn set_events(&self, events: Vec<LogEvent>) {
        *self.events.lock().await = events;
    }

    /// Replace the log with one plain `whitelist` event per member.
    pub async fn set_members(&self, members: &[&str]) {
        self.set_events(members.iter().map(|m| event("☁ whitelist", m)).collect())
            .await;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventLogFetcher for FakeEventLog {
    async fn fetch(&self, _source_id: &str, limit: u32) -> AppResult<Vec<LogEvent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::upstream_unavailable("event log is down"));
        }
        let events = self.events.lock().await;
        Ok(events.iter().take(limit as usize).cloned().collect())
    }
}

/// Directory that knows a fixed set of canonical usernames.
#[derive(Debug, Default)]
pub struct FakeDirectory {
    known: HashMap<String, String>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityDirectory for FakeDirectory {
    async fn lookup(&self, username: &str) -> AppResult<Option<DirectoryProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::upstream_unavailable("directory is down"));
        }
        Ok(self
            .known
            .get(&username.to_lowercase())
            .map(|canonical| DirectoryProfile {
                id: 42,
                username: canonical.clone(),
                trusted: false,
            }))
    }
}

/// Build a log event stamped now.
pub fn event(name: &str, value: &str) -> LogEvent {
    LogEvent {
        name: name.to_string(),
        value: value.to_string(),
        timestamp: Utc::now(),
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Upstream event log fake
    pub event_log: Arc<FakeEventLog>,
    /// Identity directory fake
    pub directory: Arc<FakeDirectory>,
    /// Credential store, for direct inspection
    pub credentials: Arc<MemoryCredentialStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with plain-encoded allow-list events.
    ///
    /// `known` is the set of usernames the directory recognises, in
    /// canonical casing.
    pub async fn new(known: &[&str]) -> Self {
        Self::with_encoding(known, PayloadEncoding::Plain).await
    }

    pub async fn with_encoding(known: &[&str], encoding: PayloadEncoding) -> Self {
        let mut config = AppConfig::default();
        config.database.enabled = false;
        config.session.store = SessionStoreKind::Memory;
        config.session.cookie_secure = false;
        config.allowlist.source_id = "123456".to_string();
        config.allowlist.encoding = encoding;
        config.allowlist.refresh_on_startup = false;
        config.auth.hash_memory_kib = 256;
        config.auth.hash_iterations = 1;
        config.auth.hash_parallelism = 1;

        let event_log = Arc::new(FakeEventLog::default());
        let directory = Arc::new(FakeDirectory {
            known: known
                .iter()
                .map(|u| (u.to_lowercase(), u.to_string()))
                .collect(),
            ..FakeDirectory::default()
        });
        let credentials = Arc::new(MemoryCredentialStore::new());
        let sessions = Arc::new(MemorySessionStore::new(&config.session));

        let hasher = PasswordHasher::new(&config.auth).expect("Failed to build hasher");
        let allowlist = Arc::new(AllowListCache::new(
            Arc::clone(&event_log) as Arc<dyn EventLogFetcher>,
            &config.allowlist,
        ));
        let registration = Arc::new(RegistrationGate::new(
            Arc::clone(&allowlist),
            IdentitySource::new(Arc::clone(&directory) as Arc<dyn IdentityDirectory>),
            Arc::clone(&credentials) as _,
            hasher.clone(),
            &config.auth,
        ));
        let authenticator = Arc::new(SessionAuthenticator::new(
            Arc::clone(&credentials) as _,
            sessions,
            hasher,
            config.session.ttl(),
            config.auth.max_secret_length,
        ));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            allowlist,
            registration,
            authenticator,
        };

        Self {
            router: gensourei_api::build_router(app_state),
            event_log,
            directory,
            credentials,
            config,
        }
    }

    /// Register an account and assert it succeeded.
    pub async fn register(&self, username: &str, password: &str) {
        let response = self
            .post(
                "/api/register",
                serde_json::json!({ "username": username, "password": password }),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Login and return the `name=value` pair of the session cookie.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post(
                "/api/login",
                serde_json::json!({ "username": username, "password": password }),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_cookie(&self.config.session.cookie_name)
            .expect("No session cookie in login response")
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        self.request("GET", path, None, cookie).await
    }

    pub async fn post(&self, path: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.request("POST", path, Some(body), cookie).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header values
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// `name=value` of the named cookie, if the response set it.
    pub fn session_cookie(&self, name: &str) -> Option<String> {
        self.set_cookies
            .iter()
            .filter_map(|c| c.split(';').next())
            .find(|pair| pair.starts_with(&format!("{name}=")))
            .map(str::to_string)
    }

    /// Full `Set-Cookie` value for the named cookie.
    pub fn raw_cookie(&self, name: &str) -> Option<&str> {
        self.set_cookies
            .iter()
            .find(|c| c.starts_with(&format!("{name}=")))
            .map(String::as_str)
    }

    /// Machine-readable error code of an error body.
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}
