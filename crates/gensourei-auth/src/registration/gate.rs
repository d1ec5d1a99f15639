//! The registration gate.

use std::sync::Arc;

use tracing::{info, warn};

use gensourei_core::config::AuthConfig;
use gensourei_core::error::AppError;
use gensourei_core::result::AppResult;
use gensourei_core::traits::CredentialStore;
use gensourei_core::types::{AllowedIdentity, NewUser};

use crate::allowlist::AllowListCache;
use crate::identity::IdentitySource;
use crate::password::PasswordHasher;

/// Decides whether a registration may proceed and persists it if so.
#[derive(Debug, Clone)]
pub struct RegistrationGate {
    allowlist: Arc<AllowListCache>,
    identities: IdentitySource,
    credentials: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    max_identity_length: usize,
    max_secret_length: usize,
}

impl RegistrationGate {
    /// Creates a gate over its collaborators.
    pub fn new(
        allowlist: Arc<AllowListCache>,
        identities: IdentitySource,
        credentials: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        config: &AuthConfig,
    ) -> Self {
        Self {
            allowlist,
            identities,
            credentials,
            hasher,
            max_identity_length: config.max_identity_length,
            max_secret_length: config.max_secret_length,
        }
    }

    /// Register `identity` with `secret`.
    ///
    /// Steps run in order and stop at the first failure:
    ///
    /// 1. Input bounds
    /// 2. Allow-list membership
    /// 3. Directory existence
    /// 4. No existing account
    /// 5. Hash the secret
    /// 6. Insert, where a lost race also reports an existing account
    pub async fn register(&self, identity: &str, secret: &str) -> AppResult<()> {
        // Step 1: Input bounds
        let identity = identity.trim();
        if identity.is_empty() || secret.is_empty() {
            return Err(AppError::invalid_input("Username and password are required"));
        }
        if identity.chars().count() > self.max_identity_length {
            return Err(AppError::invalid_input(format!(
                "Username must be at most {} characters",
                self.max_identity_length
            )));
        }
        if secret.len() > self.max_secret_length {
            return Err(AppError::invalid_input(format!(
                "Password must be at most {} bytes",
                self.max_secret_length
            )));
        }

        // Step 2: Allow-list
        if !self.allowlist.is_allowed(identity).await? {
            info!(identity, "Registration denied: not on allow-list");
            return Err(AppError::not_whitelisted(format!(
                "'{identity}' is not on the allow-list"
            )));
        }

        // Step 3: Directory
        let external = self.identities.verify(identity).await.ok_or_else(|| {
            AppError::identity_not_found(format!("'{identity}' does not exist"))
        })?;
        let username = external.canonical_username;
        // The directory may only restore case; anything else was never allow-listed.
        if AllowedIdentity::new(&username) != AllowedIdentity::new(identity) {
            warn!(identity, canonical = %username, "Directory returned a different identity");
            return Err(AppError::identity_not_found(format!(
                "'{identity}' does not exist"
            )));
        }

        // Step 4: Uniqueness
        if self.credentials.find_by_identity(&username).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "User '{username}' already exists"
            )));
        }

        // Step 5: Hash
        let password_hash = self.hasher.hash(secret).await?;

        // Step 6: Persist
        let user = self
            .credentials
            .insert(&NewUser {
                username,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(())
    }
}
