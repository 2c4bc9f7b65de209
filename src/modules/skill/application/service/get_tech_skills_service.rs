use async_trait::async_trait;

use crate::modules::skill::application::{
    domain::entities::TechSkill,
    ports::{
        incoming::use_cases::{GetTechSkillsError, GetTechSkillsUseCase},
        outgoing::SkillQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetTechSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTechSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTechSkillsUseCase for GetTechSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TechSkill>, GetTechSkillsError> {
        let skills = self
            .query
            .list_in_added_order()
            .await
            .map_err(|e| GetTechSkillsError::QueryError(e.to_string()))?;

        Ok(skills.into_iter().map(TechSkill::from).collect())
    }
}
