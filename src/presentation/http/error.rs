// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let code = err.code();
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, code, msg),
            ApplicationError::Unauthenticated => {
                Self::new(StatusCode::UNAUTHORIZED, code, "Not authenticated")
            }
            ApplicationError::InvalidCredentials => Self::new(
                StatusCode::UNAUTHORIZED,
                code,
                "Incorrect username or password",
            ),
            ApplicationError::DuplicateUsername(_) => {
                Self::new(StatusCode::CONFLICT, code, "Username taken")
            }
            ApplicationError::IdeaNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, code, "Idea not found")
            }
            ApplicationError::Unavailable(detail) => {
                tracing::error!(%detail, "request failed on a backing service");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, code, UNAVAILABLE_MESSAGE)
            }
        }
    }

    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// A request the extractors could not decode. The status stays the one
    /// axum picked (400, 415 or 422); the body follows the API error shape.
    fn rejected(status: StatusCode, detail: String) -> Self {
        tracing::debug!(%status, %detail, "request rejected by extractor");
        Self::new(status, "validation_error", detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for HttpError {
    fn from(rejection: FormRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            code: self.code.to_string(),
            message: self.message,
        };

        let mut response = (self.status, Json(payload)).into_response();
        if self.code == "unauthenticated" {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP reason phrase, e.g. `Not Found`.
    pub error: String,
    /// Stable machine-readable category, e.g. `idea_not_found`.
    pub code: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
