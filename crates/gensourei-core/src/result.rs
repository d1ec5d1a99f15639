//! Convenience result type alias for Gensourei.

use crate::error::AppError;

/// A specialized `Result` type for Gensourei operations.
pub type AppResult<T> = Result<T, AppError>;
