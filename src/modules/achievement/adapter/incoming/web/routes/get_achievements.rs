use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::achievement::application::domain::entities::{Achievement, ACHIEVEMENTS_PER_PAGE},
    shared::{
        api::{ApiResponse, ApiSecretGuard},
        pagination::{PageRequest, PageResult},
    },
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AchievementListQuery {
    /// Title prefix before the first `" - "`
    pub group: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = "achievements",
    params(AchievementListQuery),
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "One page of achievements, newest first", body = inline(SuccessResponse<PageResult<Achievement>>)),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/achievements")]
pub async fn get_achievements_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
    query: web::Query<AchievementListQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::from_query(query.page, query.per_page, ACHIEVEMENTS_PER_PAGE);
    let group = query.group.filter(|g| !g.trim().is_empty());

    match data.achievement.get_list.execute(group, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!("Failed to fetch achievements: {}", e);
            ApiResponse::internal_error()
        }
    }
}
