//! # gensourei-core
//!
//! Core crate for Gensourei. Contains configuration schemas, typed
//! identifiers, the allow-list and account domain types, the collaborator
//! traits implemented by the storage and upstream crates, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Gensourei crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
