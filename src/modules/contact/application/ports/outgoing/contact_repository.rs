use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{Contact, ContactStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct NewContactData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores a new message as `unread`.
    async fn create(&self, data: NewContactData) -> Result<Contact, ContactRepositoryError>;

    async fn set_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
