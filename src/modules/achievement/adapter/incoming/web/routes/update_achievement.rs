use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::create_achievement::map_validation_error;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::achievement::application::{
        domain::entities::Achievement,
        ports::incoming::use_cases::{UpdateAchievementCommand, UpdateAchievementError},
    },
    shared::api::{ApiResponse, IdQuery},
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAchievementRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/achievements",
    tag = "achievements",
    params(IdQuery),
    request_body = UpdateAchievementRequest,
    responses(
        (status = 200, description = "Achievement updated", body = inline(SuccessResponse<Achievement>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Achievement not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/achievements")]
pub async fn update_achievement_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
    payload: web::Json<UpdateAchievementRequest>,
) -> impl Responder {
    let Some(id) = query.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    let command = match UpdateAchievementCommand::new(
        id,
        payload.title.as_deref(),
        payload.image_url.as_deref(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.achievement.update.execute(command).await {
        Ok(achievement) => ApiResponse::success(achievement),
        Err(UpdateAchievementError::NotFound) => {
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
        Err(UpdateAchievementError::RepositoryError(msg)) => {
            error!("Failed to update achievement {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
