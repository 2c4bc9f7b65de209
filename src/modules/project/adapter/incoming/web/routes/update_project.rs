use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_project::map_validation_error;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::project::application::{
        domain::entities::{Project, ProjectFramework},
        ports::incoming::use_cases::{ProjectChanges, UpdateProjectCommand, UpdateProjectError},
    },
    shared::{api::ApiResponse, patch::PatchField},
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
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
    pub image_urls: Option<Vec<String>>,
    /// `null` clears the link; omitting it keeps the stored value.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub preview_link: PatchField<String>,
    #[serde(default)]
    pub frameworks: Option<Vec<ProjectFramework>>,
}

impl UpdateProjectRequest {
    fn into_changes(self) -> ProjectChanges {
        ProjectChanges {
            title: self.title,
            slug: self.slug,
            description: self.description,
            content: self.content,
            category: self.category,
            thumbnail: self.thumbnail,
            image_urls: self.image_urls,
            preview_link: self.preview_link,
            frameworks: self.frameworks,
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/projects",
    tag = "projects",
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 409, description = "Slug already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/projects")]
pub async fn update_project_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdateProjectRequest>,
) -> impl Responder {
    let request = payload.into_inner();

    let Some(id) = request.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    let command = match UpdateProjectCommand::new(id, request.into_changes()) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.project.update.execute(command).await {
        Ok(project) => ApiResponse::success(project),
        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UpdateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "A project with this slug already exists")
        }
        Err(UpdateProjectError::RepositoryError(msg)) => {
            error!("Failed to update project {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
