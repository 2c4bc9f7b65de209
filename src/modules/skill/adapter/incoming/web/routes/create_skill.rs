use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::skill::application::{
        domain::entities::{Skill, SkillValidationError},
        ports::incoming::use_cases::{CreateSkillCommand, CreateSkillError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSkillRequest {
    #[schema(example = "PostgreSQL")]
    #[serde(default)]
    pub title: Option<String>,
    #[schema(example = "https://cdn.example.com/skills/postgresql.svg")]
    #[serde(default)]
    pub image_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = CreateSkillRequest,
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/skills")]
pub async fn create_skill_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateSkillRequest>,
) -> impl Responder {
    let command = match CreateSkillCommand::new(
        payload.title.as_deref().unwrap_or_default(),
        payload.image_url.as_deref().unwrap_or_default(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.skill.create.execute(command).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(CreateSkillError::RepositoryError(msg)) => {
            error!("Failed to create skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn map_validation_error(err: SkillValidationError) -> HttpResponse {
    let code = match err {
        SkillValidationError::TitleRequired => "TITLE_REQUIRED",
        SkillValidationError::TitleTooLong => "TITLE_TOO_LONG",
        SkillValidationError::ImageUrlRequired => "IMAGE_URL_REQUIRED",
    };
    ApiResponse::bad_request(code, &err.to_string())
}
