//! Session authenticator: login, session lookup, logout.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use gensourei_core::error::AppError;
use gensourei_core::result::AppResult;
use gensourei_core::traits::{CredentialStore, SessionStore};
use gensourei_core::types::{NewSession, Session};

use crate::password::PasswordHasher;

use super::token::{generate_token, hash_token};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Bearer token for the client. Not stored anywhere server-side.
    pub token: String,
    /// The created session.
    pub session: Session,
}

/// Authenticates users and manages their server-side sessions.
#[derive(Debug, Clone)]
pub struct SessionAuthenticator {
    credentials: Arc<dyn CredentialStore>,
    sessions: Arc<dyn SessionStore>,
    hasher: PasswordHasher,
    ttl: Duration,
    max_secret_length: usize,
}

impl SessionAuthenticator {
    /// Creates a new authenticator. Sessions live for `ttl` from login.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
        hasher: PasswordHasher,
        ttl: Duration,
        max_secret_length: usize,
    ) -> Self {
        Self {
            credentials,
            sessions,
            hasher,
            ttl,
            max_secret_length,
        }
    }

    /// Session lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Check `secret` against the stored hash for `identity` and open a
    /// session.
    ///
    /// An unknown identity and a wrong secret both yield the same
    /// [`AppError::auth_failed`]; the unknown case still runs one hash
    /// verification.
    pub async fn login(&self, identity: &str, secret: &str) -> AppResult<IssuedSession> {
        let identity = identity.trim();
        if identity.is_empty() || secret.is_empty() || secret.len() > self.max_secret_length {
            return Err(AppError::auth_failed());
        }

        let user = match self.credentials.find_by_identity(identity).await? {
            Some(user) => user,
            None => {
                self.hasher.verify_dummy(secret).await?;
                debug!(identity, "Login for unknown user");
                return Err(AppError::auth_failed());
            }
        };

        if !self.hasher.verify(secret, &user.password_hash).await? {
            debug!(user_id = %user.id, "Login with wrong password");
            return Err(AppError::auth_failed());
        }

        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::configuration("Session lifetime overflows the clock")
        })?;
        let token = generate_token();
        let session = self
            .sessions
            .create(&NewSession {
                user_id: user.id,
                token_hash: hash_token(&token),
                created_at: now,
                expires_at,
            })
            .await?;

        info!(
            user_id = %user.id,
            session_id = %session.id,
            expires_at = %session.expires_at,
            "Login successful"
        );
        Ok(IssuedSession { token, session })
    }

    /// Resolve a token to its live session. Expired sessions resolve to `None`.
    pub async fn current_session(&self, token: &str) -> AppResult<Option<Session>> {
        self.current_session_at(token, Utc::now()).await
    }

    async fn current_session_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Session>> {
        if token.is_empty() {
            return Ok(None);
        }
        let session = self.sessions.get(&hash_token(token)).await?;
        Ok(session.filter(|s| !s.is_expired_at(now)))
    }

    /// Destroy the session behind `token`. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        if token.is_empty() {
            return Ok(());
        }
        self.sessions.destroy(&hash_token(token)).await?;
        debug!("Session destroyed");
        Ok(())
    }

    /// Remove every expired session.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        let purged = self.sessions.purge_expired(Utc::now()).await?;
        if purged > 0 {
            info!(purged, "Purged expired sessions");
        }
        Ok(purged)
    }
}
