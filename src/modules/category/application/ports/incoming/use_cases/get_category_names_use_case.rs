use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoryNamesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Names offered by the project form's category picker.
#[async_trait]
pub trait GetCategoryNamesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, GetCategoryNamesError>;
}
