use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::{
    domain::entities::{Contact, ContactStatus},
    ports::outgoing::{ContactQuery, ContactQueryError},
};

use super::sea_orm_entity::{Column, Entity, Status};

#[derive(Debug, Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list(&self, status: Option<ContactStatus>) -> Result<Vec<Contact>, ContactQueryError> {
        let mut query = Entity::find();

        if let Some(status) = status {
            query = query.filter(Column::Status.eq(Status::from(status)));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Contact, ContactQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_domain())
            .ok_or(ContactQueryError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> ContactQueryError {
    ContactQueryError::DatabaseError(e.to_string())
}
