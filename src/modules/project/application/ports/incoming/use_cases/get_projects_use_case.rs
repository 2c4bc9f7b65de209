use async_trait::async_trait;

use crate::{
    modules::project::application::{
        domain::entities::ProjectCard, ports::outgoing::ProjectListFilter,
    },
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCard>, GetProjectsError>;
}
