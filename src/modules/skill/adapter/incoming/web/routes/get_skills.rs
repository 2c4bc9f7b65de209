use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::skill::application::domain::entities::{Skill, SKILLS_PER_PAGE},
    shared::{
        api::{ApiResponse, ApiSecretGuard, PageQuery},
        pagination::{PageRequest, PageResult},
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(PageQuery),
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "One page of skills, newest first", body = inline(SuccessResponse<PageResult<Skill>>)),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let page = PageRequest::from_query(query.page, query.per_page, SKILLS_PER_PAGE);

    match data.skill.get_list.execute(page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!("Failed to fetch skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
