//! Integration tests for allow-list diagnostics and refresh behavior.

mod helpers;

use axum::http::StatusCode;
use gensourei_core::config::PayloadEncoding;

#[tokio::test]
async fn test_status_before_first_load() {
    let app = helpers::TestApp::new(&[]).await;

    let response = app.get("/api/allowlist", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 0);
    assert!(response.body["last_updated"].is_null());
    assert_eq!(response.body["members"], serde_json::json!([]));
}

#[tokio::test]
async fn test_forced_refresh_reports_members() {
    let app = helpers::TestApp::new(&[]).await;
    app.event_log.set_members(&["Carol", "bob", "alice"]).await;

    let response = app
        .post("/api/allowlist/refresh", serde_json::json!({}), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["outcome"], "replaced");
    assert_eq!(response.body["count"], 3);
    assert_eq!(
        response.body["members"],
        serde_json::json!(["alice", "bob", "carol"])
    );
    assert!(response.body["last_updated"].is_string());
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_snapshot() {
    let app = helpers::TestApp::new(&["alice"]).await;
    app.event_log.set_members(&["alice"]).await;
    app.post("/api/allowlist/refresh", serde_json::json!({}), None)
        .await;

    app.event_log.set_failing(true);
    let response = app
        .post("/api/allowlist/refresh", serde_json::json!({}), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["outcome"], "failed");
    assert_eq!(response.body["count"], 1);

    // the retained snapshot still admits registrations
    app.register("alice", "pw").await;
}

#[tokio::test]
async fn test_fresh_snapshot_is_reused_between_registrations() {
    let app = helpers::TestApp::new(&["alice", "bob"]).await;
    app.event_log.set_members(&["alice", "bob"]).await;

    app.register("alice", "pw").await;
    app.register("bob", "pw").await;

    assert_eq!(app.event_log.calls(), 1);
}

#[tokio::test]
async fn test_removed_member_is_refused_after_refresh() {
    let app = helpers::TestApp::new(&["alice", "bob"]).await;
    app.event_log.set_members(&["alice", "bob"]).await;
    app.register("alice", "pw").await;

    app.event_log.set_members(&["alice"]).await;
    app.post("/api/allowlist/refresh", serde_json::json!({}), None)
        .await;

    let response = app
        .post(
            "/api/register",
            serde_json::json!({ "username": "bob", "password": "pw" }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_only_the_configured_event_counts() {
    let app = helpers::TestApp::new(&[]).await;
    app.event_log
        .set_events(vec![
            helpers::event("☁ whitelist", "alice"),
            helpers::event("☁ highscore", "mallory"),
            helpers::event("WHITELIST", "bob"),
        ])
        .await;

    let response = app
        .post("/api/allowlist/refresh", serde_json::json!({}), None)
        .await;

    assert_eq!(response.body["members"], serde_json::json!(["alice", "bob"]));
}

#[tokio::test]
async fn test_digit_pair_payloads() {
    let app = helpers::TestApp::with_encoding(&["alice"], PayloadEncoding::DigitPairs).await;
    app.event_log
        .set_events(vec![
            helpers::event("☁ whitelist", "0112090305"),
            // odd length, skipped
            helpers::event("☁ whitelist", "011"),
        ])
        .await;

    let response = app
        .post("/api/allowlist/refresh", serde_json::json!({}), None)
        .await;
    assert_eq!(response.body["members"], serde_json::json!(["alice"]));

    app.register("alice", "pw").await;
}

#[tokio::test]
async fn test_banner_and_health() {
    let app = helpers::TestApp::new(&[]).await;

    let banner = app.request("GET", "/", None, None).await;
    assert_eq!(banner.status, StatusCode::OK);

    let health = app.get("/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
}
