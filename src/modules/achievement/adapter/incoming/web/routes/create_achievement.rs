use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::achievement::application::{
        domain::entities::{Achievement, AchievementValidationError},
        ports::incoming::use_cases::{CreateAchievementCommand, CreateAchievementError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAchievementRequest {
    #[schema(example = "AWS - Solutions Architect Associate")]
    #[serde(default)]
    pub title: Option<String>,
    #[schema(example = "https://cdn.example.com/achievements/aws-saa.png")]
    #[serde(default)]
    pub image_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/achievements",
    tag = "achievements",
    request_body = CreateAchievementRequest,
    responses(
        (status = 201, description = "Achievement created", body = inline(SuccessResponse<Achievement>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/achievements")]
pub async fn create_achievement_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateAchievementRequest>,
) -> impl Responder {
    let command = match CreateAchievementCommand::new(
        payload.title.as_deref().unwrap_or_default(),
        payload.image_url.as_deref().unwrap_or_default(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.achievement.create.execute(command).await {
        Ok(achievement) => ApiResponse::created(achievement),
        Err(CreateAchievementError::RepositoryError(msg)) => {
            error!("Failed to create achievement: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn map_validation_error(err: AchievementValidationError) -> HttpResponse {
    let code = match err {
        AchievementValidationError::TitleRequired => "TITLE_REQUIRED",
        AchievementValidationError::TitleTooLong => "TITLE_TOO_LONG",
        AchievementValidationError::ImageUrlRequired => "IMAGE_URL_REQUIRED",
    };
    ApiResponse::bad_request(code, &err.to_string())
}
