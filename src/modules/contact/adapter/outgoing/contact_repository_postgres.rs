use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::{
    domain::entities::{Contact, ContactStatus},
    ports::outgoing::{ContactRepository, ContactRepositoryError, NewContactData},
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Status};

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(&self, data: NewContactData) -> Result<Contact, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            status: Set(Status::Unread),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, ContactRepositoryError> {
        let model = ActiveModel {
            status: Set(status.into()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .first()
            .map(|m| m.to_domain())
            .ok_or(ContactRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
