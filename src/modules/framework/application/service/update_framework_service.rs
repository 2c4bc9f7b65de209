use async_trait::async_trait;

use crate::modules::framework::application::{
    domain::entities::Framework,
    ports::{
        incoming::use_cases::{UpdateFrameworkCommand, UpdateFrameworkError, UpdateFrameworkUseCase},
        outgoing::{FrameworkRepository, FrameworkRepositoryError, PatchFrameworkData},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateFrameworkUseCase for UpdateFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateFrameworkCommand,
    ) -> Result<Framework, UpdateFrameworkError> {
        let data = PatchFrameworkData {
            title: command.title().map(str::to_string),
            image_url: command.image_url().map(str::to_string),
        };

        self.repository
            .update(command.id(), data)
            .await
            .map_err(|e| match e {
                FrameworkRepositoryError::NotFound => UpdateFrameworkError::NotFound,
                other => UpdateFrameworkError::RepositoryError(other.to_string()),
            })
    }
}
