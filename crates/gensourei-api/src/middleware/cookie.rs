//! Session cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};

use gensourei_core::config::SessionConfig;

/// Parse the configured `SameSite` policy. Unknown values fall back to `None`,
/// which is what a cross-site browser client needs.
fn same_site(config: &SessionConfig) -> SameSite {
    match config.cookie_same_site.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "lax" => SameSite::Lax,
        _ => SameSite::None,
    }
}

/// Cookie carrying a freshly issued session token.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(same_site(config))
        .path("/")
        .max_age(time::Duration::seconds(config.ttl().num_seconds()))
        .build()
}

/// Cookie that, once removed from the jar, clears the session cookie.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(same_site(config))
        .path("/")
        .build()
}
