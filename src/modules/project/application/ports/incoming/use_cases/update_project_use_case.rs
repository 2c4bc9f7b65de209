use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    modules::project::application::{
        domain::{
            entities::{Project, ProjectFramework},
            policies::{
                normalize_frameworks, normalize_image_urls, normalize_optional_link,
                normalize_slug, required_field, ProjectField, ProjectValidationError,
            },
        },
        ports::outgoing::PatchProjectData,
    },
    shared::patch::PatchField,
};

/// Raw partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
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

#[derive(Debug, Clone)]
pub struct UpdateProjectCommand {
    id: Uuid,
    data: PatchProjectData,
}

impl UpdateProjectCommand {
    pub fn new(id: Uuid, changes: ProjectChanges) -> Result<Self, ProjectValidationError> {
        let required = |value: Option<String>, field| {
            value.map(|v| required_field(&v, field)).transpose()
        };

        // A blank link clears it the same way an explicit null does.
        let preview_link = match changes.preview_link {
            PatchField::Value(link) => match normalize_optional_link(Some(&link)) {
                Some(link) => PatchField::Value(link),
                None => PatchField::Null,
            },
            other => other,
        };

        let data = PatchProjectData {
            title: required(changes.title, ProjectField::Title)?,
            slug: changes.slug.as_deref().map(normalize_slug).transpose()?,
            description: required(changes.description, ProjectField::Description)?,
            content: required(changes.content, ProjectField::Content)?,
            category: required(changes.category, ProjectField::Category)?,
            thumbnail: required(changes.thumbnail, ProjectField::Thumbnail)?,
            image_urls: changes.image_urls.map(normalize_image_urls),
            preview_link,
            frameworks: changes.frameworks.map(normalize_frameworks).transpose()?,
        };

        Ok(Self { id, data })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn slug(&self) -> Option<&str> {
        self.data.slug.as_deref()
    }

    pub fn into_data(self) -> PatchProjectData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProjectCommand) -> Result<Project, UpdateProjectError>;
}
