use async_trait::async_trait;

use crate::modules::achievement::application::{
    domain::entities::Achievement,
    ports::{
        incoming::use_cases::{UpdateAchievementCommand, UpdateAchievementError, UpdateAchievementUseCase},
        outgoing::{AchievementRepository, AchievementRepositoryError, PatchAchievementData},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateAchievementUseCase for UpdateAchievementService<R>
where
    R: AchievementRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateAchievementCommand,
    ) -> Result<Achievement, UpdateAchievementError> {
        let data = PatchAchievementData {
            title: command.title().map(str::to_string),
            image_url: command.image_url().map(str::to_string),
        };

        self.repository
            .update(command.id(), data)
            .await
            .map_err(|e| match e {
                AchievementRepositoryError::NotFound => UpdateAchievementError::NotFound,
                other => UpdateAchievementError::RepositoryError(other.to_string()),
            })
    }
}
