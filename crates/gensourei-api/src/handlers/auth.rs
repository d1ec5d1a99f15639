//! Account handlers: register, login, me, logout.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MeResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{SessionToken, ValidJson};
use crate::middleware::cookie::{removal_cookie, session_cookie};
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .registration
        .register(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Registration complete",
    ))))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    let issued = state
        .authenticator
        .login(&req.username, &req.password)
        .await?;

    let jar = jar.add(session_cookie(&state.config.session, issued.token));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            user_id: issued.session.user_id,
            expires_at: issued.session.expires_at,
        })),
    ))
}

/// GET /api/me
pub async fn me(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<MeResponse>, ApiError> {
    let session = match token {
        Some(token) => state.authenticator.current_session(&token).await?,
        None => None,
    };

    Ok(Json(MeResponse {
        logged_in: session.is_some(),
        user_id: session.map(|s| s.user_id),
    }))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    if let Some(token) = token {
        state.authenticator.logout(&token).await?;
    }

    let jar = jar.remove(removal_cookie(&state.config.session));
    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse::new("Logged out"))),
    ))
}
