//! External identity verification.

pub mod source;

pub use source::IdentitySource;
