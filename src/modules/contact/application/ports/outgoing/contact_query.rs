use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{Contact, ContactStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Contact not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Newest first, optionally only messages in `status`.
    async fn list(&self, status: Option<ContactStatus>) -> Result<Vec<Contact>, ContactQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Contact, ContactQueryError>;
}
