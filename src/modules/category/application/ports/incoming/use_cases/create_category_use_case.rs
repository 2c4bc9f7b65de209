use async_trait::async_trait;

use crate::modules::category::application::domain::entities::{
    normalize_category_name, Category, CategoryNameError,
};

//
// ──────────────────────────────────────────────────────────
// Create Category Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: String,
}

impl CreateCategoryCommand {
    pub fn new(name: &str) -> Result<Self, CategoryNameError> {
        Ok(Self {
            name: normalize_category_name(name)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: CreateCategoryCommand)
        -> Result<Category, CreateCategoryError>;
}
