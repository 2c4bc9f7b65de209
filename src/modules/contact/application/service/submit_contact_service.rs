use async_trait::async_trait;

use crate::modules::contact::application::{
    domain::entities::Contact,
    ports::{
        incoming::use_cases::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase},
        outgoing::{ContactRepository, NewContactData},
    },
};

#[derive(Debug, Clone)]
pub struct SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, command: SubmitContactCommand) -> Result<Contact, SubmitContactError> {
        let data = NewContactData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            subject: command.subject().to_string(),
            message: command.message().to_string(),
        };

        self.repository
            .create(data)
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))
    }
}
