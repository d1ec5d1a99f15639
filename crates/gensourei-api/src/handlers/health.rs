//! Liveness handlers.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /
pub async fn banner() -> &'static str {
    "Gensourei API running"
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
