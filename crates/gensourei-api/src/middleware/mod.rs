//! Axum middleware stack.

pub mod cookie;
pub mod cors;
pub mod logging;
