//! Core type definitions used across the Gensourei workspace.

pub mod allowlist;
pub mod event;
pub mod id;
pub mod identity;
pub mod session;
pub mod user;

pub use allowlist::{AllowListSnapshot, AllowListStatus, AllowedIdentity};
pub use event::LogEvent;
pub use id::*;
pub use identity::{DirectoryProfile, ExternalIdentity};
pub use session::{NewSession, Session};
pub use user::{NewUser, UserRecord};
