use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::framework::application::domain::entities::Framework;

#[derive(Debug, Clone, PartialEq)]
pub struct NewFrameworkData {
    pub title: String,
    pub image_url: String,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchFrameworkData {
    pub title: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FrameworkRepositoryError {
    #[error("Framework not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FrameworkRepository: Send + Sync {
    async fn create(&self, data: NewFrameworkData) -> Result<Framework, FrameworkRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: PatchFrameworkData,
    ) -> Result<Framework, FrameworkRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), FrameworkRepositoryError>;
}
