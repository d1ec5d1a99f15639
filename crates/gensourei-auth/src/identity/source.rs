//! Confirms that an identity exists in the external directory.

use std::sync::Arc;

use tracing::{debug, warn};

use gensourei_core::traits::IdentityDirectory;
use gensourei_core::types::ExternalIdentity;

/// Thin policy layer over an [`IdentityDirectory`].
///
/// Every failure mode collapses into "not found". No retries, no caching.
#[derive(Debug, Clone)]
pub struct IdentitySource {
    directory: Arc<dyn IdentityDirectory>,
}

impl IdentitySource {
    /// Wrap a directory client.
    pub fn new(directory: Arc<dyn IdentityDirectory>) -> Self {
        Self { directory }
    }

    /// Return the directory's view of `identity`, or `None` if it does not
    /// exist or the directory could not be reached.
    pub async fn verify(&self, identity: &str) -> Option<ExternalIdentity> {
        match self.directory.lookup(identity).await {
            Ok(Some(profile)) => {
                let identity = ExternalIdentity::from(profile);
                debug!(
                    username = %identity.canonical_username,
                    trusted = identity.trusted,
                    "Identity confirmed by directory"
                );
                Some(identity)
            }
            Ok(None) => {
                debug!(identity, "Identity not found in directory");
                None
            }
            Err(e) => {
                warn!(identity, error = %e, "Identity directory unreachable, treating as not found");
                None
            }
        }
    }
}
