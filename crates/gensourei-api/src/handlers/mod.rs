//! Route handlers organized by domain.

pub mod allowlist;
pub mod auth;
pub mod health;
