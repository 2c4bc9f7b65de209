use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use std::sync::Arc;

use crate::{
    modules::framework::application::{
        domain::entities::Framework,
        ports::outgoing::{FrameworkQuery, FrameworkQueryError},
    },
    shared::pagination::{PageRequest, PageResult},
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct FrameworkQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FrameworkQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FrameworkQuery for FrameworkQueryPostgres {
    async fn list(&self, page: PageRequest) -> Result<PageResult<Framework>, FrameworkQueryError> {
        let query = Entity::find().order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = models.iter().map(|m| m.to_domain()).collect();

        Ok(PageResult::new(items, page, total))
    }

    async fn list_all(&self) -> Result<Vec<Framework>, FrameworkQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}

fn map_db_err(e: DbErr) -> FrameworkQueryError {
    FrameworkQueryError::DatabaseError(e.to_string())
}
