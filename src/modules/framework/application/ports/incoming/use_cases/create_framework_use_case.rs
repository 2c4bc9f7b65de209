use async_trait::async_trait;

use crate::modules::framework::application::domain::entities::{
    normalize_image_url, normalize_title, Framework, FrameworkValidationError,
};

#[derive(Debug, Clone)]
pub struct CreateFrameworkCommand {
    title: String,
    image_url: String,
}

impl CreateFrameworkCommand {
    pub fn new(title: &str, image_url: &str) -> Result<Self, FrameworkValidationError> {
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
pub enum CreateFrameworkError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateFrameworkUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateFrameworkCommand,
    ) -> Result<Framework, CreateFrameworkError>;
}
