use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    normalize_email, normalize_message, normalize_name, normalize_subject, Contact,
    ContactValidationError,
};

/// A validated message from the public contact form.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl SubmitContactCommand {
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self {
            name: normalize_name(name)?,
            email: normalize_email(email)?,
            subject: normalize_subject(subject)?,
            message: normalize_message(message)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, command: SubmitContactCommand) -> Result<Contact, SubmitContactError>;
}
