// src/presentation/http/controllers/system.rs
use crate::application::dto::serde_time;
use crate::infrastructure::database;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct BannerResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(with = "serde_time")]
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok".into(),
            timestamp: Utc::now(),
            database_url_scheme: None,
            error: None,
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner.", body = BannerResponse)
    ),
    tag = "System"
)]
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "IdeaHub backend running".into(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process liveness.", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[utoipa::path(
    get,
    path = "/health/db",
    responses(
        (status = 200, description = "Database reachable.", body = HealthResponse),
        (status = 503, description = "Database unreachable.", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_db(Extension(state): Extension<HttpState>) -> (StatusCode, Json<HealthResponse>) {
    let mut body = HealthResponse {
        database_url_scheme: state.database_scheme.clone(),
        ..HealthResponse::ok()
    };

    match database::ping(&state.db_pool).await {
        Ok(()) => (StatusCode::OK, Json(body)),
        Err(err) => {
            tracing::error!(error = %err, "database health probe failed");
            body.status = "error".into();
            body.error = Some("database unreachable".into());
            (StatusCode::SERVICE_UNAVAILABLE, Json(body))
        }
    }
}
