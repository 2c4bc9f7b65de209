use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::modules::achievement::application::ports::{
    incoming::use_cases::{GetAchievementGroupsError, GetAchievementGroupsUseCase},
    outgoing::AchievementQuery,
};

#[derive(Debug, Clone)]
pub struct GetAchievementGroupsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetAchievementGroupsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAchievementGroupsUseCase for GetAchievementGroupsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, GetAchievementGroupsError> {
        let all = self
            .query
            .list_all()
            .await
            .map_err(|e| GetAchievementGroupsError::QueryError(e.to_string()))?;

        let groups: BTreeSet<String> = all
            .iter()
            .map(|a| a.group())
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();

        Ok(groups.into_iter().collect())
    }
}
