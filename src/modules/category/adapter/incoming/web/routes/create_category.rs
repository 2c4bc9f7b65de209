use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::category::application::{
        domain::entities::{Category, CategoryNameError},
        ports::incoming::use_cases::{CreateCategoryCommand, CreateCategoryError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Web Development")]
    #[serde(default)]
    pub name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = inline(SuccessResponse<Category>)),
        (status = 400, description = "Name missing or too long", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/categories")]
pub async fn create_category_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateCategoryRequest>,
) -> impl Responder {
    let command = match CreateCategoryCommand::new(payload.name.as_deref().unwrap_or_default()) {
        Ok(cmd) => cmd,
        Err(err) => return map_name_error(err),
    };

    match data.category.create.execute(command).await {
        Ok(category) => ApiResponse::created(category),
        Err(CreateCategoryError::RepositoryError(msg)) => {
            error!("Failed to create category: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn map_name_error(err: CategoryNameError) -> HttpResponse {
    match err {
        CategoryNameError::Required => ApiResponse::bad_request("NAME_REQUIRED", "Name is required"),
        CategoryNameError::TooLong => ApiResponse::bad_request(
            "NAME_TOO_LONG",
            "Name must not exceed 100 characters",
        ),
    }
}
