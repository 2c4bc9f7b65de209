use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::{
    incoming::use_cases::{DeleteProjectError, DeleteProjectUseCase},
    outgoing::{ProjectRepository, ProjectRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            other => DeleteProjectError::RepositoryError(other.to_string()),
        })
    }
}
