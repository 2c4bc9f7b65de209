use async_trait::async_trait;

use crate::{
    modules::skill::application::domain::entities::Skill,
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// Newest first, one page at a time
    async fn list(&self, page: PageRequest) -> Result<PageResult<Skill>, SkillQueryError>;

    /// Every skill, oldest first
    async fn list_in_added_order(&self) -> Result<Vec<Skill>, SkillQueryError>;
}
