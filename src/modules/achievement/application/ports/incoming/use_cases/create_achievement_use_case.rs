use async_trait::async_trait;

use crate::modules::achievement::application::domain::entities::{
    normalize_image_url, normalize_title, Achievement, AchievementValidationError,
};

#[derive(Debug, Clone)]
pub struct CreateAchievementCommand {
    title: String,
    image_url: String,
}

impl CreateAchievementCommand {
    pub fn new(title: &str, image_url: &str) -> Result<Self, AchievementValidationError> {
        Ok(Self {
            title: normalize_title(title)?,
            image_url: normalize_image_url(image_url)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAchievementError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAchievementUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateAchievementCommand,
    ) -> Result<Achievement, CreateAchievementError>;
}
