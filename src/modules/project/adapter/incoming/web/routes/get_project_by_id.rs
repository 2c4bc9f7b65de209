use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::project::application::{
        domain::entities::Project, ports::incoming::use_cases::GetProjectByIdError,
    },
    shared::api::{ApiResponse, ApiSecretGuard, IdQuery},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/projects/edit",
    tag = "projects",
    params(IdQuery),
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "Full project for editing", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Id missing", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/edit")]
pub async fn get_project_by_id_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    let Some(id) = query.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    match data.project.get_by_id.execute(id).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetProjectByIdError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetProjectByIdError::QueryError(msg)) => {
            error!("Failed to fetch project {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
