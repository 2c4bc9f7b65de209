use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::category::application::{
    domain::entities::Category,
    ports::outgoing::{CategoryRepository, CategoryRepositoryError},
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create(&self, name: String) -> Result<Category, CategoryRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn rename(&self, id: Uuid, name: String) -> Result<Category, CategoryRepositoryError> {
        let model = ActiveModel {
            name: Set(name),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .first()
            .map(|m| m.to_domain())
            .ok_or(CategoryRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> CategoryRepositoryError {
    CategoryRepositoryError::DatabaseError(e.to_string())
}
