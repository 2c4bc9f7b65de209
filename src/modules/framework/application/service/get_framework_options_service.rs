use async_trait::async_trait;

use crate::modules::framework::application::{
    domain::entities::FrameworkOption,
    ports::{
        incoming::use_cases::{GetFrameworkOptionsError, GetFrameworkOptionsUseCase},
        outgoing::FrameworkQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetFrameworkOptionsService<Q>
where
    Q: FrameworkQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetFrameworkOptionsService<Q>
where
    Q: FrameworkQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFrameworkOptionsUseCase for GetFrameworkOptionsService<Q>
where
    Q: FrameworkQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<FrameworkOption>, GetFrameworkOptionsError> {
        let frameworks = self
            .query
            .list_all()
            .await
            .map_err(|e| GetFrameworkOptionsError::QueryError(e.to_string()))?;

        Ok(frameworks.into_iter().map(FrameworkOption::from).collect())
    }
}
