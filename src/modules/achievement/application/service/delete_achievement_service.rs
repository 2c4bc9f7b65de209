use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::achievement::application::ports::{
    incoming::use_cases::{DeleteAchievementError, DeleteAchievementUseCase},
    outgoing::{AchievementRepository, AchievementRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAchievementUseCase for DeleteAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteAchievementError> {
        self.repository.delete(id).await.map_err(|e| match e {
            AchievementRepositoryError::NotFound => DeleteAchievementError::NotFound,
            other => DeleteAchievementError::RepositoryError(other.to_string()),
        })
    }
}
