use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    modules::category::application::ports::incoming::use_cases::DeleteCategoryError,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteCategoryRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
}

#[utoipa::path(
    delete,
    path = "/api/categories",
    tag = "categories",
    request_body = DeleteCategoryRequest,
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Id missing", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/categories")]
pub async fn delete_category_handler(
    data: web::Data<AppState>,
    payload: web::Json<DeleteCategoryRequest>,
) -> impl Responder {
    let Some(id) = payload.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    match data.category.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(DeleteCategoryError::RepositoryError(msg)) => {
            error!("Failed to delete category {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
