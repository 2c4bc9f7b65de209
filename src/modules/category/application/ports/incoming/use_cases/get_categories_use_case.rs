use async_trait::async_trait;

use crate::modules::category::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError>;
}
