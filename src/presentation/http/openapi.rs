// src/presentation/http/openapi.rs
use axum::Json;
use utoipa::openapi::{
    Components,
    security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::system::root,
        crate::presentation::http::controllers::system::health,
        crate::presentation::http::controllers::system::health_db,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::me,
        crate::presentation::http::controllers::ideas::list_ideas,
        crate::presentation::http::controllers::ideas::create_idea,
        crate::presentation::http::controllers::ideas::like_idea
    ),
    components(
        schemas(
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::system::BannerResponse,
            crate::presentation::http::controllers::system::HealthResponse,
            crate::presentation::http::controllers::auth::LoginForm,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::presentation::http::controllers::ideas::CreateIdeaRequest,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::UserDto,
            crate::application::dto::IdeaDto
        )
    ),
    tags(
        (name = "Auth", description = "Token issuance"),
        (name = "Users", description = "Registration and user listing"),
        (name = "Ideas", description = "Ideas board and likes"),
        (name = "System", description = "Banner and health probes")
    ),
    modifiers(&BearerSecurity),
    info(
        title = "IdeaHub API",
        description = "Share ideas and like the ones you find worthwhile",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let scheme = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .build();
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(scheme));
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
