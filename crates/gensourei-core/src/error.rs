//! Unified application error types for Gensourei.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The registration and login outcomes
//! a caller is expected to handle have their own [`ErrorKind`]; everything
//! else collapses into an internal failure at the HTTP boundary.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Identity or secret missing or out of bounds.
    InvalidInput,
    /// The identity is not on the current allow-list.
    NotWhitelisted,
    /// The identity directory does not know this identity.
    IdentityNotFound,
    /// An account for this identity already exists.
    AlreadyExists,
    /// Login failed. Deliberately does not say why.
    AuthFailed,
    /// An upstream source was needed for a fresh answer and could not be reached.
    UpstreamUnavailable,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind is an expected outcome the caller may act on.
    ///
    /// Non-domain kinds are reported to clients as a generic internal error.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::NotWhitelisted
                | Self::IdentityNotFound
                | Self::AlreadyExists
                | Self::AuthFailed
                | Self::UpstreamUnavailable
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "INVALID_INPUT"),
            Self::NotWhitelisted => write!(f, "NOT_WHITELISTED"),
            Self::IdentityNotFound => write!(f, "IDENTITY_NOT_FOUND"),
            Self::AlreadyExists => write!(f, "ALREADY_EXISTS"),
            Self::AuthFailed => write!(f, "AUTH_FAILED"),
            Self::UpstreamUnavailable => write!(f, "UPSTREAM_UNAVAILABLE"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Gensourei.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Create a not-whitelisted error.
    pub fn not_whitelisted(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotWhitelisted, message)
    }

    /// Create an identity-not-found error.
    pub fn identity_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IdentityNotFound, message)
    }

    /// Create an already-exists error.
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    /// Create the single authentication failure.
    ///
    /// The message is fixed so that unknown identities and wrong secrets
    /// cannot be told apart.
    pub fn auth_failed() -> Self {
        Self::new(ErrorKind::AuthFailed, "Invalid username or password")
    }

    /// Create an upstream-unavailable error.
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamUnavailable, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
