use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAchievementGroupsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Sorted, de-duplicated group names for the gallery filter.
#[async_trait]
pub trait GetAchievementGroupsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, GetAchievementGroupsError>;
}
