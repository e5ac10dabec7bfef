// src/presentation/http/controllers/ideas.rs
use crate::application::{
    commands::ideas::{CreateIdeaCommand, LikeIdeaCommand},
    dto::IdeaDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateIdeaRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/ideas",
    responses(
        (status = 200, description = "All ideas with their like counts.", body = [IdeaDto])
    ),
    tag = "Ideas"
)]
pub async fn list_ideas(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<IdeaDto>>> {
    state
        .services
        .idea_queries
        .list_ideas()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/ideas",
    request_body = CreateIdeaRequest,
    responses(
        (status = 201, description = "Idea created, owned by the caller.", body = IdeaDto),
        (status = 400, description = "Invalid title or description.", body = ErrorResponse),
        (status = 401, description = "Missing or rejected token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Ideas"
)]
pub async fn create_idea(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateIdeaRequest>,
) -> HttpResult<(StatusCode, Json<IdeaDto>)> {
    let command = CreateIdeaCommand {
        title: payload.title,
        description: payload.description,
    };

    let idea = state
        .services
        .idea_commands
        .create_idea(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(idea)))
}

#[utoipa::path(
    post,
    path = "/ideas/{id}/like",
    params(("id" = i64, Path, description = "Idea id")),
    responses(
        (status = 200, description = "Idea with its like count. Repeating the like changes nothing.", body = IdeaDto),
        (status = 400, description = "Idea id is not an integer.", body = ErrorResponse),
        (status = 401, description = "Missing or rejected token.", body = ErrorResponse),
        (status = 404, description = "Idea not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Ideas"
)]
pub async fn like_idea(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<IdeaDto>> {
    state
        .services
        .idea_commands
        .like_idea(&user, LikeIdeaCommand { idea_id: id })
        .await
        .into_http()
        .map(Json)
}
