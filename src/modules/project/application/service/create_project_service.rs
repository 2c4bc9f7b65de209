use async_trait::async_trait;

use crate::modules::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase},
        outgoing::{ProjectQuery, ProjectRepository, ProjectRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreateProjectService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateProjectService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateProjectUseCase for CreateProjectService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        let taken = self
            .query
            .slug_taken(command.slug(), None)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))?;

        if taken {
            return Err(CreateProjectError::SlugAlreadyExists);
        }

        // The unique index still guards against a concurrent insert.
        self.repository
            .create(command.into_data())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
                other => CreateProjectError::RepositoryError(other.to_string()),
            })
    }
}
