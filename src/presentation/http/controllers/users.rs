// src/presentation/http/controllers/users.rs
use crate::application::{commands::users::RegisterUserCommand, dto::UserDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered.", body = UserDto),
        (status = 400, description = "Invalid username or password.", body = ErrorResponse),
        (status = 409, description = "Username taken.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All registered users.", body = [UserDto])
    ),
    tag = "Users"
)]
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "The authenticated user.", body = UserDto),
        (status = 401, description = "Missing or rejected token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> Json<UserDto> {
    Json(state.services.user_queries.current_user(&user))
}
