use async_trait::async_trait;

use crate::modules::contact::application::{
    domain::entities::{Contact, ContactStatus},
    ports::{
        incoming::use_cases::{GetContactsError, GetContactsUseCase},
        outgoing::ContactQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContactsUseCase for GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<Contact>, GetContactsError> {
        self.query
            .list(status)
            .await
            .map_err(|e| GetContactsError::QueryError(e.to_string()))
    }
}
