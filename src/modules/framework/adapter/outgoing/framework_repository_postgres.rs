use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::framework::application::{
    domain::entities::Framework,
    ports::outgoing::{
        FrameworkRepository, FrameworkRepositoryError, NewFrameworkData, PatchFrameworkData,
    },
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct FrameworkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FrameworkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FrameworkRepository for FrameworkRepositoryPostgres {
    async fn create(&self, data: NewFrameworkData) -> Result<Framework, FrameworkRepositoryError> {
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
        data: PatchFrameworkData,
    ) -> Result<Framework, FrameworkRepositoryError> {
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
            .ok_or(FrameworkRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), FrameworkRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(FrameworkRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> FrameworkRepositoryError {
    FrameworkRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::framework::adapter::outgoing::sea_orm_entity::Model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: Uuid, title: &str, image_url: &str) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            title: title.to_string(),
            image_url: image_url.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_framework_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, "Rust", "https://cdn/rust.svg")]])
            .into_connection();

        let repo = FrameworkRepositoryPostgres::new(Arc::new(db));
        let framework = repo
            .create(NewFrameworkData {
                title: "Rust".to_string(),
                image_url: "https://cdn/rust.svg".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(framework.id, id);
        assert_eq!(framework.title, "Rust");
    }

    #[tokio::test]
    async fn test_update_framework_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, "Rust 2024", "https://cdn/rust.svg")]])
            .into_connection();

        let repo = FrameworkRepositoryPostgres::new(Arc::new(db));
        let framework = repo
            .update(
                id,
                PatchFrameworkData {
                    title: Some("Rust 2024".to_string()),
                    image_url: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(framework.title, "Rust 2024");
    }

    #[tokio::test]
    async fn test_update_framework_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = FrameworkRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update(Uuid::new_v4(), PatchFrameworkData::default())
            .await;

        assert!(matches!(result, Err(FrameworkRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_framework_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = FrameworkRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(FrameworkRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_framework_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("fk violation".to_string())])
            .into_connection();

        let repo = FrameworkRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(FrameworkRepositoryError::DatabaseError(_))));
    }
}
