use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::skill::application::ports::incoming::use_cases::DeleteSkillError,
    shared::api::{ApiResponse, IdQuery},
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/skills",
    tag = "skills",
    params(IdQuery),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 400, description = "Id missing", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/skills")]
pub async fn delete_skill_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    let Some(id) = query.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    match data.skill.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(DeleteSkillError::RepositoryError(msg)) => {
            error!("Failed to delete skill {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
