//! # gensourei-api
//!
//! HTTP API layer for Gensourei built on Axum.
//!
//! Provides the registration, login, and allow-list endpoints, the session
//! cookie handling, CORS and request logging middleware, extractors, DTOs,
//! and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
