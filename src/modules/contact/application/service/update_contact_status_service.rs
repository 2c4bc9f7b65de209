use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::{
    domain::entities::{Contact, ContactStatus},
    ports::{
        incoming::use_cases::{UpdateContactStatusError, UpdateContactStatusUseCase},
        outgoing::{ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateContactStatusService<Q, R>
where
    Q: ContactQuery + Send + Sync,
    R: ContactRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateContactStatusService<Q, R>
where
    Q: ContactQuery + Send + Sync,
    R: ContactRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateContactStatusUseCase for UpdateContactStatusService<Q, R>
where
    Q: ContactQuery + Send + Sync,
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, UpdateContactStatusError> {
        let current = self.query.get_by_id(id).await.map_err(|e| match e {
            ContactQueryError::NotFound => UpdateContactStatusError::NotFound,
            other => UpdateContactStatusError::RepositoryError(other.to_string()),
        })?;

        if !current.status.can_transition_to(status) {
            return Err(UpdateContactStatusError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        if current.status == status {
            return Ok(current);
        }

        self.repository
            .set_status(id, status)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => UpdateContactStatusError::NotFound,
                other => UpdateContactStatusError::RepositoryError(other.to_string()),
            })
    }
}
