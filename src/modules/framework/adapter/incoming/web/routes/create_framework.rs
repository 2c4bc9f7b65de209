use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::framework::application::{
        domain::entities::{Framework, FrameworkValidationError},
        ports::incoming::use_cases::{CreateFrameworkCommand, CreateFrameworkError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFrameworkRequest {
    #[schema(example = "Next.js")]
    #[serde(default)]
    pub title: Option<String>,
    #[schema(example = "https://cdn.example.com/frameworks/nextjs.svg")]
    #[serde(default)]
    pub image_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/frameworks",
    tag = "frameworks",
    request_body = CreateFrameworkRequest,
    responses(
        (status = 201, description = "Framework created", body = inline(SuccessResponse<Framework>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/frameworks")]
pub async fn create_framework_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateFrameworkRequest>,
) -> impl Responder {
    let command = match CreateFrameworkCommand::new(
        payload.title.as_deref().unwrap_or_default(),
        payload.image_url.as_deref().unwrap_or_default(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.framework.create.execute(command).await {
        Ok(framework) => ApiResponse::created(framework),
        Err(CreateFrameworkError::RepositoryError(msg)) => {
            error!("Failed to create framework: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(crate) fn map_validation_error(err: FrameworkValidationError) -> HttpResponse {
    let code = match err {
        FrameworkValidationError::TitleRequired => "TITLE_REQUIRED",
        FrameworkValidationError::TitleTooLong => "TITLE_TOO_LONG",
        FrameworkValidationError::ImageUrlRequired => "IMAGE_URL_REQUIRED",
    };
    ApiResponse::bad_request(code, &err.to_string())
}
