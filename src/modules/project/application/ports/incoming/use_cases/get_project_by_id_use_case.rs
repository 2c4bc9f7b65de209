use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectByIdError {
    #[error("Project not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Loads the full project for the edit form.
#[async_trait]
pub trait GetProjectByIdUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Project, GetProjectByIdError>;
}
