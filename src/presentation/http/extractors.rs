// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// The caller resolved from the `Authorization: Bearer` header. Handlers
/// that take this extractor reject every request the gate does not accept.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::unavailable("application state missing"))
            })?;

        let header = parts.headers.typed_get::<Authorization<Bearer>>();
        let token = header.as_ref().map(Authorization::<Bearer>::token);

        let user = app_state
            .services
            .gate()
            .authenticate(token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

/// `axum::Json` whose rejections use the API error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

/// `axum::Form` whose rejections use the API error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(HttpError))]
pub struct ApiForm<T>(pub T);

/// `axum::extract::Path` whose rejections use the API error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);
