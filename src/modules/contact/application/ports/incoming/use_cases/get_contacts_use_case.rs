use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{Contact, ContactStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetContactsUseCase: Send + Sync {
    async fn execute(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<Contact>, GetContactsError>;
}
