use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::framework::application::domain::entities::FrameworkOption,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/projects/frameworks",
    tag = "frameworks",
    responses(
        (status = 200, description = "Frameworks available to the project form", body = inline(SuccessResponse<Vec<FrameworkOption>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/frameworks")]
pub async fn get_framework_options_handler(data: web::Data<AppState>) -> impl Responder {
    match data.framework.get_options.execute().await {
        Ok(options) => ApiResponse::success(options),
        Err(e) => {
            error!("Failed to fetch framework options: {}", e);
            ApiResponse::internal_error()
        }
    }
}
