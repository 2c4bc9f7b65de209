use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use std::sync::Arc;

use crate::{
    modules::skill::application::{
        domain::entities::Skill,
        ports::outgoing::{SkillQuery, SkillQueryError},
    },
    shared::pagination::{PageRequest, PageResult},
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list(&self, page: PageRequest) -> Result<PageResult<Skill>, SkillQueryError> {
        let query = Entity::find().order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            models.iter().map(|m| m.to_domain()).collect(),
            page,
            total,
        ))
    }

    async fn list_in_added_order(&self) -> Result<Vec<Skill>, SkillQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Title)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}
