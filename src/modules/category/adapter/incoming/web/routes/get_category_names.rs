use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/projects/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Sorted distinct category names", body = inline(SuccessResponse<Vec<String>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/categories")]
pub async fn get_category_names_handler(data: web::Data<AppState>) -> impl Responder {
    match data.category.get_names.execute().await {
        Ok(names) => ApiResponse::success(names),
        Err(e) => {
            error!("Failed to fetch category names: {}", e);
            ApiResponse::internal_error()
        }
    }
}
