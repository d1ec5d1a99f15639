//! External identity directory.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::DirectoryProfile;

/// Looks up identities in a third-party directory.
#[async_trait]
pub trait IdentityDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Return the profile for `username`.
    ///
    /// `Ok(None)` means the directory answered and does not know the
    /// identity. `Err` means the directory could not be asked.
    async fn lookup(&self, username: &str) -> AppResult<Option<DirectoryProfile>>;
}
