use axum::http::StatusCode;

mod support;

use support::{read_json, spawn_app};

#[tokio::test]
async fn openapi_document_is_served() {
    let app = spawn_app().await;

    let resp = app.get("/openapi.json", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = read_json(resp).await;

    assert_eq!(doc["info"]["title"], "IdeaHub API");
    assert!(doc["paths"]["/ideas/{id}/like"]["post"].is_object());
    assert!(doc["paths"]["/auth/login"]["post"].is_object());
    assert_eq!(
        doc["components"]["securitySchemes"]["bearerAuth"]["scheme"],
        "bearer"
    );
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = spawn_app().await;

    let request = axum::http::Request::builder()
        .method(axum::http::Method::OPTIONS)
        .uri("/ideas")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.send(request).await;

    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
    assert_eq!(
        resp.headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}
