use async_trait::async_trait;

use crate::modules::skill::application::{
    domain::entities::Skill,
    ports::{
        incoming::use_cases::{UpdateSkillCommand, UpdateSkillError, UpdateSkillUseCase},
        outgoing::{SkillRepository, SkillRepositoryError, PatchSkillData},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateSkillCommand,
    ) -> Result<Skill, UpdateSkillError> {
        let data = PatchSkillData {
            title: command.title().map(str::to_string),
            image_url: command.image_url().map(str::to_string),
        };

        self.repository
            .update(command.id(), data)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
                other => UpdateSkillError::RepositoryError(other.to_string()),
            })
    }
}
