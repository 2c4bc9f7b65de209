use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, PartialEq)]
pub struct NewSkillData {
    pub title: String,
    pub image_url: String,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSkillData {
    pub title: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, data: NewSkillData) -> Result<Skill, SkillRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: PatchSkillData,
    ) -> Result<Skill, SkillRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError>;
}
