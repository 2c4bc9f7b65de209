use async_trait::async_trait;

use crate::modules::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase},
        outgoing::{ProjectQuery, ProjectRepository, ProjectRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProjectService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProjectService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateProjectUseCase for UpdateProjectService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateProjectCommand) -> Result<Project, UpdateProjectError> {
        let id = command.id();

        if let Some(slug) = command.slug() {
            let taken = self
                .query
                .slug_taken(slug, Some(id))
                .await
                .map_err(|e| UpdateProjectError::RepositoryError(e.to_string()))?;

            if taken {
                return Err(UpdateProjectError::SlugAlreadyExists);
            }
        }

        self.repository
            .update(id, command.into_data())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::SlugAlreadyExists => UpdateProjectError::SlugAlreadyExists,
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })
    }
}
