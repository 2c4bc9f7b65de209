use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{GetProjectByIdError, GetProjectByIdUseCase},
        outgoing::{ProjectQuery, ProjectQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct GetProjectByIdService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProjectByIdService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectByIdUseCase for GetProjectByIdService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Project, GetProjectByIdError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetProjectByIdError::NotFound,
            other => GetProjectByIdError::QueryError(other.to_string()),
        })
    }
}
