use async_trait::async_trait;

use crate::modules::skill::application::{
    domain::entities::Skill,
    ports::{
        incoming::use_cases::{CreateSkillCommand, CreateSkillError, CreateSkillUseCase},
        outgoing::{SkillRepository, NewSkillData},
    },
};

#[derive(Debug, Clone)]
pub struct CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateSkillCommand,
    ) -> Result<Skill, CreateSkillError> {
        let data = NewSkillData {
            title: command.title().to_string(),
            image_url: command.image_url().to_string(),
        };

        self.repository
            .create(data)
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::ports::outgoing::{
        SkillRepositoryError, PatchSkillData,
    };
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockSkillRepository {
        fail: bool,
    }

    #[async_trait]
    impl SkillRepository for MockSkillRepository {
        async fn create(
            &self,
            data: NewSkillData,
        ) -> Result<Skill, SkillRepositoryError> {
            if self.fail {
                return Err(SkillRepositoryError::DatabaseError("insert failed".into()));
            }
            let now = Utc::now();
            Ok(Skill {
                id: Uuid::new_v4(),
                title: data.title,
                image_url: data.image_url,
                created_at: now,
                updated_at: now,
            })
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: PatchSkillData,
        ) -> Result<Skill, SkillRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), SkillRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn create_skill_success() {
        let service = CreateSkillService::new(MockSkillRepository { fail: false });
        let command = CreateSkillCommand::new("Linux", "https://cdn/linux.svg").unwrap();

        let skill = service.execute(command).await.unwrap();

        assert_eq!(skill.title, "Linux");
        assert_eq!(skill.image_url, "https://cdn/linux.svg");
    }

    #[tokio::test]
    async fn create_skill_repository_error() {
        let service = CreateSkillService::new(MockSkillRepository { fail: true });
        let command = CreateSkillCommand::new("Linux", "https://cdn/linux.svg").unwrap();

        let result = service.execute(command).await;

        assert!(matches!(result, Err(CreateSkillError::RepositoryError(_))));
    }
}
