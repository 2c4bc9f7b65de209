use async_trait::async_trait;

use crate::{
    modules::achievement::application::{
        domain::entities::Achievement,
        ports::{
            incoming::use_cases::{GetAchievementsError, GetAchievementsUseCase},
            outgoing::AchievementQuery,
        },
    },
    shared::pagination::{paginate, PageRequest, PageResult},
};

#[derive(Debug, Clone)]
pub struct GetAchievementsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetAchievementsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAchievementsUseCase for GetAchievementsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    async fn execute(
        &self,
        group: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Achievement>, GetAchievementsError> {
        let all = self
            .query
            .list_all()
            .await
            .map_err(|e| GetAchievementsError::QueryError(e.to_string()))?;

        // Grouping is derived from the title, so filtering happens here.
        let matching = match group.as_deref().map(str::trim) {
            Some(group) => all.into_iter().filter(|a| a.group() == group).collect(),
            None => all,
        };

        Ok(paginate(matching, page))
    }
}
