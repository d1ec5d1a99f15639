//! Collaborator traits defined in `gensourei-core` and implemented by other crates.

pub mod credential;
pub mod event_log;
pub mod identity;
pub mod session;

pub use credential::CredentialStore;
pub use event_log::EventLogFetcher;
pub use identity::IdentityDirectory;
pub use session::SessionStore;
