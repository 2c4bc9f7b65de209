use async_trait::async_trait;

use crate::modules::category::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
        outgoing::CategoryRepository,
    },
};

#[derive(Debug, Clone)]
pub struct CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CreateCategoryError> {
        self.repository
            .create(command.name().to_string())
            .await
            .map_err(|e| CreateCategoryError::RepositoryError(e.to_string()))
    }
}
