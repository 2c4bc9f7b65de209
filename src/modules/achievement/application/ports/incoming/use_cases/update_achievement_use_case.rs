use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::achievement::application::domain::entities::{
    normalize_image_url, normalize_title, Achievement, AchievementValidationError,
};

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateAchievementCommand {
    id: Uuid,
    title: Option<String>,
    image_url: Option<String>,
}

impl UpdateAchievementCommand {
    pub fn new(
        id: Uuid,
        title: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<Self, AchievementValidationError> {
        Ok(Self {
            id,
            title: title.map(normalize_title).transpose()?,
            image_url: image_url.map(normalize_image_url).transpose()?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAchievementError {
    #[error("Achievement not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateAchievementUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateAchievementCommand,
    ) -> Result<Achievement, UpdateAchievementError>;
}
