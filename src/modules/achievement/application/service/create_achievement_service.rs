use async_trait::async_trait;

use crate::modules::achievement::application::{
    domain::entities::Achievement,
    ports::{
        incoming::use_cases::{CreateAchievementCommand, CreateAchievementError, CreateAchievementUseCase},
        outgoing::{AchievementRepository, NewAchievementData},
    },
};

#[derive(Debug, Clone)]
pub struct CreateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateAchievementUseCase for CreateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateAchievementCommand,
    ) -> Result<Achievement, CreateAchievementError> {
        let data = NewAchievementData {
            title: command.title().to_string(),
            image_url: command.image_url().to_string(),
        };

        self.repository
            .create(data)
            .await
            .map_err(|e| CreateAchievementError::RepositoryError(e.to_string()))
    }
}
