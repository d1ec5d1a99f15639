//! Account persistence.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{NewUser, UserRecord};

/// Persists user records keyed by case-insensitive username.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new account.
    ///
    /// This is an atomic insert-if-absent: when an account with the same
    /// username (ignoring case) already exists the store returns an
    /// [`ErrorKind::AlreadyExists`](crate::ErrorKind::AlreadyExists) error
    /// and leaves the existing record untouched.
    async fn insert(&self, user: &NewUser) -> AppResult<UserRecord>;

    /// Find an account by username, ignoring case.
    async fn find_by_identity(&self, username: &str) -> AppResult<Option<UserRecord>>;
}
