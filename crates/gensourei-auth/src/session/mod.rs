//! Session lifecycle: login, lookup, logout.

pub mod manager;
pub mod token;

pub use manager::{IssuedSession, SessionAuthenticator};
