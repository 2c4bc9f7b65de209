use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use std::sync::Arc;

use crate::modules::category::application::{
    domain::entities::Category,
    ports::outgoing::{CategoryQuery, CategoryQueryError},
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn list_names(&self) -> Result<Vec<String>, CategoryQueryError> {
        Entity::find()
            .select_only()
            .column(Column::Name)
            .distinct()
            .order_by_asc(Column::Name)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> CategoryQueryError {
    CategoryQueryError::DatabaseError(e.to_string())
}
