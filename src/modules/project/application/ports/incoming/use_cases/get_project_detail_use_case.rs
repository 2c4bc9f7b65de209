use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectDetailError {
    #[error("Project not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Project page lookup by slug, with related projects attached.
#[async_trait]
pub trait GetProjectDetailUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ProjectDetail, GetProjectDetailError>;
}
