use async_trait::async_trait;

use crate::{
    modules::skill::application::domain::entities::Skill,
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Skill>, GetSkillsError>;
}
