// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt as _;

use ideahub::application::services::ApplicationServices;
use ideahub::infrastructure::security::token::JwtTokenManager;

use super::builders::TestAppBuilder;
use super::mocks::ManualClock;

pub const TEST_SECRET: &str = "integration-test-secret-0123";

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub clock: Arc<ManualClock>,
    pub tokens: Arc<JwtTokenManager>,
    pub pool: SqlitePool,
    /// Keeps a file-backed database alive for the lifetime of the app.
    pub _data_dir: Option<tempfile::TempDir>,
}

/// Full application with default wiring.
pub async fn spawn_app() -> TestApp {
    TestAppBuilder::new().build().await
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value, token: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn post_empty(&self, uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Values must already be URL-safe.
    pub async fn post_form(&self, uri: &str, pairs: &[(&str, &str)]) -> Response {
        let encoded = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encoded))
            .unwrap();
        self.send(request).await
    }

    /// Register through HTTP and return the created user JSON.
    pub async fn register(&self, username: &str, password: &str) -> Value {
        let resp = self
            .post_json(
                "/users",
                &serde_json::json!({ "username": username, "password": password }),
                None,
            )
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED, "register {username}");
        read_json(resp).await
    }

    /// Log in through HTTP and return the access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let resp = self
            .post_form("/auth/login", &[("username", username), ("password", password)])
            .await;
        assert_eq!(resp.status(), StatusCode::OK, "login {username}");
        let json = read_json(resp).await;
        json["access_token"]
            .as_str()
            .expect("access_token in login response")
            .to_string()
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an error body with the expected status and code.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_code: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );

    let json = read_json(resp).await;
    assert_eq!(json["code"], expected_code, "unexpected body: {json}");
    assert_eq!(
        json["error"],
        expected_status.canonical_reason().unwrap_or("error")
    );
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message field"
    );
}
