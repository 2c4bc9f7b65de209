use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{
    normalize_image_url, normalize_title, Skill, SkillValidationError,
};

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateSkillCommand {
    id: Uuid,
    title: Option<String>,
    image_url: Option<String>,
}

impl UpdateSkillCommand {
    pub fn new(
        id: Uuid,
        title: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<Self, SkillValidationError> {
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
pub enum UpdateSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateSkillCommand,
    ) -> Result<Skill, UpdateSkillError>;
}
