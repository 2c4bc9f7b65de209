use async_trait::async_trait;

use crate::modules::framework::application::domain::entities::FrameworkOption;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFrameworkOptionsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetFrameworkOptionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<FrameworkOption>, GetFrameworkOptionsError>;
}
