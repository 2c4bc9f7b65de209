use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::achievement::application::{
    domain::entities::Achievement,
    ports::outgoing::{AchievementQuery, AchievementQueryError},
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct AchievementQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AchievementQuery for AchievementQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Achievement>, AchievementQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}

fn map_db_err(e: DbErr) -> AchievementQueryError {
    AchievementQueryError::DatabaseError(e.to_string())
}
