use async_trait::async_trait;

use crate::modules::framework::application::{
    domain::entities::Framework,
    ports::{
        incoming::use_cases::{CreateFrameworkCommand, CreateFrameworkError, CreateFrameworkUseCase},
        outgoing::{FrameworkRepository, NewFrameworkData},
    },
};

#[derive(Debug, Clone)]
pub struct CreateFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateFrameworkUseCase for CreateFrameworkService<R>
where
    R: FrameworkRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateFrameworkCommand,
    ) -> Result<Framework, CreateFrameworkError> {
        let data = NewFrameworkData {
            title: command.title().to_string(),
            image_url: command.image_url().to_string(),
        };

        self.repository
            .create(data)
            .await
            .map_err(|e| CreateFrameworkError::RepositoryError(e.to_string()))
    }
}
