use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::create_framework::map_validation_error;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::framework::application::{
        domain::entities::Framework,
        ports::incoming::use_cases::{UpdateFrameworkCommand, UpdateFrameworkError},
    },
    shared::api::{ApiResponse, IdQuery},
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFrameworkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/frameworks",
    tag = "frameworks",
    params(IdQuery),
    request_body = UpdateFrameworkRequest,
    responses(
        (status = 200, description = "Framework updated", body = inline(SuccessResponse<Framework>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Framework not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/frameworks")]
pub async fn update_framework_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
    payload: web::Json<UpdateFrameworkRequest>,
) -> impl Responder {
    let Some(id) = query.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    let command = match UpdateFrameworkCommand::new(
        id,
        payload.title.as_deref(),
        payload.image_url.as_deref(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.framework.update.execute(command).await {
        Ok(framework) => ApiResponse::success(framework),
        Err(UpdateFrameworkError::NotFound) => {
            ApiResponse::not_found("FRAMEWORK_NOT_FOUND", "Framework not found")
        }
        Err(UpdateFrameworkError::RepositoryError(msg)) => {
            error!("Failed to update framework {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
