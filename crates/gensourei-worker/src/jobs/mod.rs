//! Scheduled job bodies.

pub mod allowlist;
pub mod sessions;

pub use allowlist::AllowListRefreshJob;
pub use sessions::SessionPurgeJob;
