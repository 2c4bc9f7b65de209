use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::project::application::ports::incoming::use_cases::DeleteProjectError,
    shared::api::{ApiResponse, IdQuery},
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/projects",
    tag = "projects",
    params(IdQuery),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 400, description = "Id missing", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/projects")]
pub async fn delete_project_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    let Some(id) = query.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    match data.project.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!("Failed to delete project {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
