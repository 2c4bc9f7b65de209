use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::category::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, name: String) -> Result<Category, CategoryRepositoryError>;

    async fn rename(&self, id: Uuid, name: String) -> Result<Category, CategoryRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError>;
}
