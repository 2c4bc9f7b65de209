use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::category::application::domain::entities::{
    normalize_category_name, Category, CategoryNameError,
};

#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    id: Uuid,
    name: String,
}

impl UpdateCategoryCommand {
    pub fn new(id: Uuid, name: &str) -> Result<Self, CategoryNameError> {
        Ok(Self {
            id,
            name: normalize_category_name(name)?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCategoryError {
    #[error("Category not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCategoryCommand)
        -> Result<Category, UpdateCategoryError>;
}
