use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::category::application::domain::entities::Category,
    shared::api::{ApiResponse, ApiSecretGuard},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "All categories, newest first", body = inline(SuccessResponse<Vec<Category>>)),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/categories")]
pub async fn get_categories_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.category.get_list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => {
            error!("Failed to fetch categories: {}", e);
            ApiResponse::internal_error()
        }
    }
}
