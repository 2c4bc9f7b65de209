use async_trait::async_trait;

use crate::{
    modules::framework::application::domain::entities::Framework,
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FrameworkQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FrameworkQuery: Send + Sync {
    /// Newest first, one page at a time
    async fn list(&self, page: PageRequest) -> Result<PageResult<Framework>, FrameworkQueryError>;

    /// Every framework, newest first
    async fn list_all(&self) -> Result<Vec<Framework>, FrameworkQueryError>;
}
