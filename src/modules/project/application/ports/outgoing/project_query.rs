use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    modules::project::application::domain::entities::{Project, ProjectCard},
    shared::pagination::{PageRequest, PageResult},
};

/// Filters for the public project list. Both are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    /// Exact category name
    pub category: Option<String>,
    /// Case-insensitive substring of the title
    pub search: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Newest first.
    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCard>, ProjectQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Project, ProjectQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError>;

    /// Newest projects in `category`, excluding `exclude_id`.
    async fn related_in_category(
        &self,
        category: &str,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Project>, ProjectQueryError>;

    /// Newest projects of any category, excluding `exclude_id`.
    async fn latest_except(
        &self,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Project>, ProjectQueryError>;

    /// Whether another project already uses `slug`.
    async fn slug_taken(
        &self,
        slug: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, ProjectQueryError>;
}
