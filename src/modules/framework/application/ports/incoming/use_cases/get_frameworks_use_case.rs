use async_trait::async_trait;

use crate::{
    modules::framework::application::domain::entities::Framework,
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFrameworksError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetFrameworksUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Framework>, GetFrameworksError>;
}
