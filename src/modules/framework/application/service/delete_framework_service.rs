use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::framework::application::ports::{
    incoming::use_cases::{DeleteFrameworkError, DeleteFrameworkUseCase},
    outgoing::{FrameworkRepository, FrameworkRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteFrameworkUseCase for DeleteFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteFrameworkError> {
        self.repository.delete(id).await.map_err(|e| match e {
            FrameworkRepositoryError::NotFound => DeleteFrameworkError::NotFound,
            other => DeleteFrameworkError::RepositoryError(other.to_string()),
        })
    }
}
