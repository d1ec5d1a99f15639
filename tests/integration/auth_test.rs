//! Integration tests for login, session lookup and logout.

mod helpers;

use axum::http::StatusCode;
use gensourei_core::traits::CredentialStore;

async fn app_with_user(username: &str, password: &str) -> helpers::TestApp {
    let app = helpers::TestApp::new(&[username]).await;
    app.event_log.set_members(&[username]).await;
    app.register(username, password).await;
    app
}

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let app = app_with_user("alice", "hunter2").await;

    let response = app
        .post(
            "/api/login",
            serde_json::json!({ "username": "alice", "password": "hunter2" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body["data"]["user_id"].is_string());
    assert!(response.body["data"]["expires_at"].is_string());

    let raw = response
        .raw_cookie(&app.config.session.cookie_name)
        .expect("session cookie");
    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("Max-Age=86400"));
    // the token is never echoed in the body
    let cookie = response
        .session_cookie(&app.config.session.cookie_name)
        .unwrap();
    let token = cookie.split_once('=').unwrap().1;
    assert!(!response.body.to_string().contains(token));
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_username() {
    let app = app_with_user("Alice", "hunter2").await;
    app.login("aLiCe", "hunter2").await;
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let app = app_with_user("alice", "hunter2").await;

    let wrong = app
        .post(
            "/api/login",
            serde_json::json!({ "username": "alice", "password": "nope" }),
            None,
        )
        .await;
    let unknown = app
        .post(
            "/api/login",
            serde_json::json!({ "username": "nobody", "password": "nope" }),
            None,
        )
        .await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body, unknown.body);
    assert_eq!(wrong.error_code(), Some("AUTH_FAILED"));
    assert!(wrong.set_cookies.is_empty());
}

#[tokio::test]
async fn test_login_missing_password_is_invalid_input() {
    let app = app_with_user("alice", "hunter2").await;

    let response = app
        .post("/api/login", serde_json::json!({ "username": "alice" }), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("INVALID_INPUT"));
}

#[tokio::test]
async fn test_me_without_cookie() {
    let app = helpers::TestApp::new(&[]).await;

    let response = app.get("/api/me", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["logged_in"], false);
    assert!(response.body.get("user_id").is_none());
}

#[tokio::test]
async fn test_me_with_session() {
    let app = app_with_user("alice", "hunter2").await;
    let cookie = app.login("alice", "hunter2").await;

    let response = app.get("/api/me", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["logged_in"], true);

    let stored = app
        .credentials
        .find_by_identity("alice")
        .await
        .unwrap()
        .expect("user persisted");
    assert_eq!(response.body["user_id"], stored.id.to_string());
}

#[tokio::test]
async fn test_me_with_forged_cookie() {
    let app = app_with_user("alice", "hunter2").await;
    let cookie = format!("{}=not-a-real-token", app.config.session.cookie_name);

    let response = app.get("/api/me", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["logged_in"], false);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = app_with_user("alice", "hunter2").await;
    let cookie = app.login("alice", "hunter2").await;

    let response = app
        .post("/api/logout", serde_json::json!({}), Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "Logged out");
    let removal = response
        .raw_cookie(&app.config.session.cookie_name)
        .expect("removal cookie");
    assert!(removal.contains("Max-Age=0"));

    // replaying the old cookie no longer resolves
    let me = app.get("/api/me", Some(&cookie)).await;
    assert_eq!(me.body["logged_in"], false);
}

#[tokio::test]
async fn test_logout_without_session_is_ok() {
    let app = helpers::TestApp::new(&[]).await;

    let response = app.post("/api/logout", serde_json::json!({}), None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let app = app_with_user("alice", "hunter2").await;
    let first = app.login("alice", "hunter2").await;
    let second = app.login("alice", "hunter2").await;
    assert_ne!(first, second);

    app.post("/api/logout", serde_json::json!({}), Some(&first))
        .await;

    assert_eq!(app.get("/api/me", Some(&first)).await.body["logged_in"], false);
    assert_eq!(app.get("/api/me", Some(&second)).await.body["logged_in"], true);
}

#[tokio::test]
async fn test_register_login_me_walkthrough() {
    let app = helpers::TestApp::new(&["Alice"]).await;
    app.event_log.set_members(&["alice"]).await;

    app.register("Alice", "pw1").await;

    let duplicate = app
        .post(
            "/api/register",
            serde_json::json!({ "username": "alice", "password": "pw2" }),
            None,
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.error_code(), Some("ALREADY_EXISTS"));

    let wrong = app
        .post(
            "/api/login",
            serde_json::json!({ "username": "alice", "password": "wrongpw" }),
            None,
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.error_code(), Some("AUTH_FAILED"));

    // the second registration attempt did not replace the secret
    let rejected = app
        .post(
            "/api/login",
            serde_json::json!({ "username": "alice", "password": "pw2" }),
            None,
        )
        .await;
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);

    let cookie = app.login("alice", "pw1").await;
    let me = app.get("/api/me", Some(&cookie)).await;
    assert_eq!(me.body["logged_in"], true);

    let stored = app
        .credentials
        .find_by_identity("alice")
        .await
        .unwrap()
        .expect("user persisted");
    assert_eq!(stored.username, "Alice");
    assert_eq!(me.body["user_id"], stored.id.to_string());
}
