use async_trait::async_trait;

use crate::modules::category::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// All categories, newest first
    async fn list(&self) -> Result<Vec<Category>, CategoryQueryError>;

    /// Distinct names in ascending order
    async fn list_names(&self) -> Result<Vec<String>, CategoryQueryError>;
}
