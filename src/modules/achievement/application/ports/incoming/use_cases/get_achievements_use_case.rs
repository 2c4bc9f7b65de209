use async_trait::async_trait;

use crate::{
    modules::achievement::application::domain::entities::Achievement,
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAchievementsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetAchievementsUseCase: Send + Sync {
    /// `group` keeps only achievements whose title prefix equals it exactly.
    async fn execute(
        &self,
        group: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Achievement>, GetAchievementsError>;
}
