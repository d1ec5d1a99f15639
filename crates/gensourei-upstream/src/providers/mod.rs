//! Upstream provider implementations.

pub mod directory;
pub mod event_log;

pub use directory::HttpIdentityDirectory;
pub use event_log::HttpEventLogFetcher;
