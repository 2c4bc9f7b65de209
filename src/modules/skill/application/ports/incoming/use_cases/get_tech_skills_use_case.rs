use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::TechSkill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTechSkillsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// The full, unpaginated grid for the home page.
#[async_trait]
pub trait GetTechSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TechSkill>, GetTechSkillsError>;
}
