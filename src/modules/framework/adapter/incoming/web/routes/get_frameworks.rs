use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::framework::application::domain::entities::{Framework, FRAMEWORKS_PER_PAGE},
    shared::{
        api::{ApiResponse, ApiSecretGuard, PageQuery},
        pagination::{PageRequest, PageResult},
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/frameworks",
    tag = "frameworks",
    params(PageQuery),
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "One page of frameworks, newest first", body = inline(SuccessResponse<PageResult<Framework>>)),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/frameworks")]
pub async fn get_frameworks_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let page = PageRequest::from_query(query.page, query.per_page, FRAMEWORKS_PER_PAGE);

    match data.framework.get_list.execute(page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!("Failed to fetch frameworks: {}", e);
            ApiResponse::internal_error()
        }
    }
}
