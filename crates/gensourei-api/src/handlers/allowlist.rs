//! Allow-list diagnostics.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{AllowListRefreshResponse, AllowListResponse};
use crate::state::AppState;

/// GET /api/allowlist
pub async fn status(State(state): State<AppState>) -> Json<AllowListResponse> {
    Json(state.allowlist.inspect().await.into())
}

/// POST /api/allowlist/refresh
pub async fn refresh(State(state): State<AppState>) -> Json<AllowListRefreshResponse> {
    let outcome = state.allowlist.force_refresh().await;
    let status = state.allowlist.inspect().await;
    Json(AllowListRefreshResponse::new(outcome, status))
}
