use async_trait::async_trait;

use crate::{
    modules::framework::application::{
        domain::entities::Framework,
        ports::{
            incoming::use_cases::{GetFrameworksError, GetFrameworksUseCase},
            outgoing::FrameworkQuery,
        },
    },
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone)]
pub struct GetFrameworksService<Q>
where
    Q: FrameworkQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetFrameworksService<Q>
where
    Q: FrameworkQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFrameworksUseCase for GetFrameworksService<Q>
where
    Q: FrameworkQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Framework>, GetFrameworksError> {
        self.query
            .list(page)
            .await
            .map_err(|e| GetFrameworksError::QueryError(e.to_string()))
    }
}
