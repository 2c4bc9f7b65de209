use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{
    normalize_image_url, normalize_title, Skill, SkillValidationError,
};

#[derive(Debug, Clone)]
pub struct CreateSkillCommand {
    title: String,
    image_url: String,
}

impl CreateSkillCommand {
    pub fn new(title: &str, image_url: &str) -> Result<Self, SkillValidationError> {
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
pub enum CreateSkillError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateSkillCommand,
    ) -> Result<Skill, CreateSkillError>;
}
