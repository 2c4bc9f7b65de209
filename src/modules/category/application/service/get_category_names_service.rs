use async_trait::async_trait;

use crate::modules::category::application::ports::{
    incoming::use_cases::{GetCategoryNamesError, GetCategoryNamesUseCase},
    outgoing::CategoryQuery,
};

#[derive(Debug, Clone)]
pub struct GetCategoryNamesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoryNamesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoryNamesUseCase for GetCategoryNamesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, GetCategoryNamesError> {
        self.query
            .list_names()
            .await
            .map_err(|e| GetCategoryNamesError::QueryError(e.to_string()))
    }
}
