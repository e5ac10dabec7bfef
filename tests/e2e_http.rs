use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{read_json, spawn_app};

#[tokio::test]
async fn ideas_board_scenario() {
    let app = spawn_app().await;

    let alice = app.register("alice", "pw1").await;
    assert_eq!(alice["username"], "alice");
    assert!(alice.get("password_hash").is_none());
    let alice_token = app.login("alice", "pw1").await;

    let resp = app
        .post_json(
            "/ideas",
            &json!({ "title": "Solar Roads", "description": "..." }),
            Some(&alice_token),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let idea = read_json(resp).await;
    assert_eq!(idea["title"], "Solar Roads");
    assert_eq!(idea["description"], "...");
    assert_eq!(idea["owner_id"], alice["id"]);
    assert_eq!(idea["likes"], 0);

    let like_uri = format!("/ideas/{}/like", idea["id"]);

    let resp = app.post_empty(&like_uri, Some(&alice_token)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["likes"], 1);

    let resp = app.post_empty(&like_uri, Some(&alice_token)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["likes"], 1);

    app.register("bob", "pw2").await;
    let bob_token = app.login("bob", "pw2").await;
    let resp = app.post_empty(&like_uri, Some(&bob_token)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["likes"], 2);

    let listed = read_json(app.get("/ideas", None).await).await;
    let listed = listed.as_array().expect("idea list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], idea["id"]);
    assert_eq!(listed[0]["likes"], 2);

    let like_rows: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM likes")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(like_rows, 2);
}

#[tokio::test]
async fn login_returns_bearer_token_and_user() {
    let app = spawn_app().await;
    app.register("alice", "pw1").await;

    let resp = app
        .post_form("/auth/login", &[("username", "alice"), ("password", "pw1")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;

    assert_eq!(body["token_type"], "bearer");
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["expires_in"], 30 * 60);
    assert_eq!(body["issued_at"], "2024-01-01T00:00:00Z");
    assert_eq!(body["expires_at"], "2024-01-01T00:30:00Z");
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn current_user_reflects_token_subject() {
    let app = spawn_app().await;
    let alice = app.register("alice", "pw1").await;
    app.register("bob", "pw2").await;
    let token = app.login("alice", "pw1").await;

    let resp = app.get("/users/me", Some(&token)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me = read_json(resp).await;
    assert_eq!(me, alice);
}

#[tokio::test]
async fn users_are_listed_in_registration_order() {
    let app = spawn_app().await;
    app.register("alice", "pw1").await;
    app.register("bob", "pw2").await;

    let users = read_json(app.get("/users", None).await).await;
    let names: Vec<&str> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["alice", "bob"]);
}

#[tokio::test]
async fn idea_without_description_is_accepted() {
    let app = spawn_app().await;
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    let resp = app
        .post_json("/ideas", &json!({ "title": "Quiet Trains" }), Some(&token))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let idea = read_json(resp).await;
    assert!(idea["description"].is_null());
    assert_eq!(idea["created_at"], "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn system_endpoints_respond() {
    let app = spawn_app().await;

    let banner = read_json(app.get("/", None).await).await;
    assert_eq!(banner["message"], "IdeaHub backend running");

    let resp = app.get("/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["status"], "ok");

    let resp = app.get("/health/db", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database_url_scheme"], "sqlite");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn database_probe_reports_closed_pool() {
    let app = spawn_app().await;
    app.pool.close().await;

    let resp = app.get("/health/db", None).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "database unreachable");
}
