use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::skill::application::domain::entities::TechSkill,
    shared::api::{ApiResponse, ApiSecretGuard},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/skills/tech",
    tag = "skills",
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "Every skill for the home page grid, in the order added", body = inline(SuccessResponse<Vec<TechSkill>>)),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/skills/tech")]
pub async fn get_tech_skills_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.get_tech.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => {
            error!("Failed to fetch tech skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
