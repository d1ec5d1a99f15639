//! `SessionToken` extractor: reads the session cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;

/// The raw session token from the request cookie, if any.
///
/// Resolving it to a session is up to the handler.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.session.cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty());
        Ok(Self(token))
    }
}
