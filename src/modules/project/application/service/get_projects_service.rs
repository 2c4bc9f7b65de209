use async_trait::async_trait;

use crate::{
    modules::project::application::{
        domain::entities::ProjectCard,
        ports::{
            incoming::use_cases::{GetProjectsError, GetProjectsUseCase},
            outgoing::{ProjectListFilter, ProjectQuery},
        },
    },
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone)]
pub struct GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCard>, GetProjectsError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| GetProjectsError::QueryError(e.to_string()))
    }
}
