use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::ports::{
    incoming::use_cases::{DeleteSkillError, DeleteSkillUseCase},
    outgoing::{SkillRepository, SkillRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillError> {
        self.repository.delete(id).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
            other => DeleteSkillError::RepositoryError(other.to_string()),
        })
    }
}
