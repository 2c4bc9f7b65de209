use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::project::application::{
        domain::{
            entities::{Project, ProjectFramework},
            policies::ProjectValidationError,
        },
        ports::incoming::use_cases::{CreateProjectCommand, CreateProjectError, NewProjectInput},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub preview_link: Option<String>,
    #[serde(default)]
    pub frameworks: Vec<ProjectFramework>,
}

impl From<CreateProjectRequest> for NewProjectInput {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            slug: req.slug.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            content: req.content.unwrap_or_default(),
            category: req.category.unwrap_or_default(),
            thumbnail: req.thumbnail.unwrap_or_default(),
            image_urls: req.image_urls,
            preview_link: req.preview_link,
            frameworks: req.frameworks,
        }
    }
}

pub(crate) fn map_validation_error(err: ProjectValidationError) -> HttpResponse {
    let message = err.to_string();
    match err {
        ProjectValidationError::Required(field) => {
            let code = format!("{}_REQUIRED", field.as_str().to_uppercase());
            ApiResponse::bad_request(&code, &message)
        }
        ProjectValidationError::TitleTooLong => ApiResponse::bad_request("TITLE_TOO_LONG", &message),
        ProjectValidationError::CategoryTooLong => {
            ApiResponse::bad_request("CATEGORY_TOO_LONG", &message)
        }
        ProjectValidationError::SlugTooLong => ApiResponse::bad_request("SLUG_TOO_LONG", &message),
        ProjectValidationError::InvalidSlug => ApiResponse::bad_request("INVALID_SLUG", &message),
        ProjectValidationError::InvalidFramework(_) => {
            ApiResponse::bad_request("INVALID_FRAMEWORK", &message)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Slug already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateProjectRequest>,
) -> impl Responder {
    let command = match CreateProjectCommand::new(payload.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.project.create.execute(command).await {
        Ok(project) => ApiResponse::created(project),
        Err(CreateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "A project with this slug already exists")
        }
        Err(CreateProjectError::RepositoryError(msg)) => {
            error!("Failed to create project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
