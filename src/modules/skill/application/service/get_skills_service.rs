use async_trait::async_trait;

use crate::{
    modules::skill::application::{
        domain::entities::Skill,
        ports::{
            incoming::use_cases::{GetSkillsError, GetSkillsUseCase},
            outgoing::SkillQuery,
        },
    },
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone)]
pub struct GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Skill>, GetSkillsError> {
        self.query
            .list(page)
            .await
            .map_err(|e| GetSkillsError::QueryError(e.to_string()))
    }
}
