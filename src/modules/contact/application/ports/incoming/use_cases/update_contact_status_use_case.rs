use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{Contact, ContactStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContactStatusError {
    #[error("Contact not found")]
    NotFound,

    #[error("Cannot change status from {} to {}", .from.as_str(), .to.as_str())]
    InvalidTransition {
        from: ContactStatus,
        to: ContactStatus,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateContactStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, UpdateContactStatusError>;
}
