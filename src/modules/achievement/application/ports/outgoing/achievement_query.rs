use async_trait::async_trait;

use crate::modules::achievement::application::domain::entities::Achievement;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AchievementQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AchievementQuery: Send + Sync {
    /// Every achievement, newest first
    async fn list_all(&self) -> Result<Vec<Achievement>, AchievementQueryError>;
}
