use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::project::application::{
        domain::entities::{ProjectCard, PROJECTS_PER_PAGE},
        ports::outgoing::ProjectListFilter,
    },
    shared::{
        api::{ApiResponse, ApiSecretGuard},
        pagination::{PageRequest, PageResult},
    },
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProjectListQuery {
    /// Exact category name
    pub category: Option<String>,
    /// Case-insensitive title substring
    pub search: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(ProjectListQuery),
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "One page of projects, newest first", body = inline(SuccessResponse<PageResult<ProjectCard>>)),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
) -> impl Responder {
    let filter = ProjectListFilter {
        category: non_blank(&query.category),
        search: non_blank(&query.search),
    };
    let page = PageRequest::from_query(query.page, query.per_page, PROJECTS_PER_PAGE);

    match data.project.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!("Failed to fetch projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
