//! # gensourei-auth
//!
//! Registration and login for Gensourei.
//!
//! ## Modules
//!
//! - `allowlist`: TTL-bounded cache of approved identities read from the event log
//! - `identity`: existence checks against the external identity directory
//! - `registration`: the ordered registration gate
//! - `password`: Argon2id password hashing
//! - `session`: login, session lookup, and logout

pub mod allowlist;
pub mod identity;
pub mod password;
pub mod registration;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use allowlist::{AllowListCache, PayloadDecoder, RefreshOutcome};
pub use identity::IdentitySource;
pub use password::PasswordHasher;
pub use registration::RegistrationGate;
pub use session::{IssuedSession, SessionAuthenticator};
