use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::achievement::application::domain::entities::Achievement;

#[derive(Debug, Clone, PartialEq)]
pub struct NewAchievementData {
    pub title: String,
    pub image_url: String,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchAchievementData {
    pub title: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AchievementRepositoryError {
    #[error("Achievement not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn create(&self, data: NewAchievementData) -> Result<Achievement, AchievementRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: PatchAchievementData,
    ) -> Result<Achievement, AchievementRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AchievementRepositoryError>;
}
