use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteContactUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactError>;
}
