//! # gensourei-cache
//!
//! In-process implementations of the credential and session stores.
//!
//! - **sessions**: bounded [moka](https://crates.io/crates/moka) cache whose
//!   time-to-live matches the session lifetime
//! - **credentials**: a concurrent map keyed by lower-cased username, for
//!   development runs without PostgreSQL
//!
//! Nothing here survives a restart.

pub mod memory;

pub use memory::{MemoryCredentialStore, MemorySessionStore};
