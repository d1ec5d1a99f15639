//! # gensourei-upstream
//!
//! reqwest-backed implementations of the two external collaborators:
//! the event log the allow-list is read from, and the public identity
//! directory used to confirm that an identity exists.

pub mod client;
pub mod providers;

pub use client::build_client;
pub use providers::{HttpEventLogFetcher, HttpIdentityDirectory};
