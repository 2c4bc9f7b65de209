use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::framework::application::ports::incoming::use_cases::DeleteFrameworkError,
    shared::api::{ApiResponse, IdQuery},
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/frameworks",
    tag = "frameworks",
    params(IdQuery),
    responses(
        (status = 204, description = "Framework deleted"),
        (status = 400, description = "Id missing", body = ErrorResponse),
        (status = 404, description = "Framework not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/frameworks")]
pub async fn delete_framework_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    let Some(id) = query.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    match data.framework.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteFrameworkError::NotFound) => {
            ApiResponse::not_found("FRAMEWORK_NOT_FOUND", "Framework not found")
        }
        Err(DeleteFrameworkError::RepositoryError(msg)) => {
            error!("Failed to delete framework {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
