use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::{
    incoming::use_cases::{DeleteContactError, DeleteContactUseCase},
    outgoing::{ContactRepository, ContactRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteContactUseCase for DeleteContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteContactError> {
        self.repository.delete(id).await.map_err(|e| match e {
            ContactRepositoryError::NotFound => DeleteContactError::NotFound,
            other => DeleteContactError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::{
        domain::entities::{Contact, ContactStatus},
        ports::outgoing::NewContactData,
    };

    struct MockContactRepository {
        result: Result<(), ContactRepositoryError>,
    }

    #[async_trait]
    impl ContactRepository for MockContactRepository {
        async fn create(&self, _data: NewContactData) -> Result<Contact, ContactRepositoryError> {
            unimplemented!()
        }

        async fn set_status(
            &self,
            _id: Uuid,
            _status: ContactStatus,
        ) -> Result<Contact, ContactRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ContactRepositoryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn missing_contact_is_not_found() {
        let service = DeleteContactService::new(MockContactRepository {
            result: Err(ContactRepositoryError::NotFound),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteContactError::NotFound)));
    }

    #[tokio::test]
    async fn database_error_is_repository_error() {
        let service = DeleteContactService::new(MockContactRepository {
            result: Err(ContactRepositoryError::DatabaseError("down".into())),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteContactError::RepositoryError(_))));
    }
}
