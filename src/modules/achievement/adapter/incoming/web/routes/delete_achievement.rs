use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::achievement::application::ports::incoming::use_cases::DeleteAchievementError,
    shared::api::{ApiResponse, IdQuery},
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/achievements",
    tag = "achievements",
    params(IdQuery),
    responses(
        (status = 204, description = "Achievement deleted"),
        (status = 400, description = "Id missing", body = ErrorResponse),
        (status = 404, description = "Achievement not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/achievements")]
pub async fn delete_achievement_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    let Some(id) = query.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    match data.achievement.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteAchievementError::NotFound) => {
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
        Err(DeleteAchievementError::RepositoryError(msg)) => {
            error!("Failed to delete achievement {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
