//! In-memory store implementations.

pub mod credentials;
pub mod sessions;

pub use credentials::MemoryCredentialStore;
pub use sessions::MemorySessionStore;
