use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    modules::project::application::domain::entities::{Project, ProjectFramework},
    shared::patch::PatchField,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectData {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub thumbnail: String,
    pub image_urls: Vec<String>,
    pub preview_link: Option<String>,
    pub frameworks: Vec<ProjectFramework>,
}

/// `None` (or `PatchField::Unset`) keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProjectData {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub preview_link: PatchField<String>,
    pub frameworks: Option<Vec<ProjectFramework>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
