use async_trait::async_trait;

use crate::modules::project::application::{
    domain::{
        entities::{Project, ProjectFramework},
        policies::{
            normalize_frameworks, normalize_image_urls, normalize_optional_link, normalize_slug,
            required_field, ProjectField, ProjectValidationError,
        },
    },
    ports::outgoing::CreateProjectData,
};

/// Raw form values as submitted by the dashboard.
#[derive(Debug, Clone, Default)]
pub struct NewProjectInput {
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

/// A validated, normalized project ready to be stored.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    data: CreateProjectData,
}

impl CreateProjectCommand {
    pub fn new(input: NewProjectInput) -> Result<Self, ProjectValidationError> {
        let data = CreateProjectData {
            title: required_field(&input.title, ProjectField::Title)?,
            slug: normalize_slug(&input.slug)?,
            description: required_field(&input.description, ProjectField::Description)?,
            content: required_field(&input.content, ProjectField::Content)?,
            category: required_field(&input.category, ProjectField::Category)?,
            thumbnail: required_field(&input.thumbnail, ProjectField::Thumbnail)?,
            image_urls: normalize_image_urls(input.image_urls),
            preview_link: normalize_optional_link(input.preview_link.as_deref()),
            frameworks: normalize_frameworks(input.frameworks)?,
        };

        Ok(Self { data })
    }

    pub fn slug(&self) -> &str {
        &self.data.slug
    }

    pub fn into_data(self) -> CreateProjectData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError>;
}
