use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::application::{
    domain::entities::Skill,
    ports::outgoing::{
        SkillRepository, SkillRepositoryError, NewSkillData, PatchSkillData,
    },
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create(&self, data: NewSkillData) -> Result<Skill, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            image_url: Set(data.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        data: PatchSkillData,
    ) -> Result<Skill, SkillRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title);
        }

        if let Some(image_url) = data.image_url {
            model.image_url = Set(image_url);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .first()
            .map(|m| m.to_domain())
            .ok_or(SkillRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}
