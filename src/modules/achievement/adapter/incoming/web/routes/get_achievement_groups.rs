use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::{ApiResponse, ApiSecretGuard},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/achievements/groups",
    tag = "achievements",
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "Sorted achievement group names", body = inline(SuccessResponse<Vec<String>>)),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/achievements/groups")]
pub async fn get_achievement_groups_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.achievement.get_groups.execute().await {
        Ok(groups) => ApiResponse::success(groups),
        Err(e) => {
            error!("Failed to fetch achievement groups: {}", e);
            ApiResponse::internal_error()
        }
    }
}
