use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    modules::project::application::{
        domain::entities::Project,
        ports::outgoing::{
            CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
        },
    },
    shared::patch::PatchField,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            content: Set(data.content),
            category: Set(data.category),
            thumbnail: Set(data.thumbnail),
            image_urls: Set(to_json(&data.image_urls)?),
            preview_link: Set(data.preview_link),
            frameworks: Set(to_json(&data.frameworks)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_slug_error)?;

        to_domain(&inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(slug) = data.slug {
            model.slug = Set(slug);
        }
        if let Some(description) = data.description {
            model.description = Set(description);
        }
        if let Some(content) = data.content {
            model.content = Set(content);
        }
        if let Some(category) = data.category {
            model.category = Set(category);
        }
        if let Some(thumbnail) = data.thumbnail {
            model.thumbnail = Set(thumbnail);
        }
        if let Some(image_urls) = data.image_urls {
            model.image_urls = Set(to_json(&image_urls)?);
        }
        match data.preview_link {
            PatchField::Unset => {}
            PatchField::Null => model.preview_link = Set(None),
            PatchField::Value(link) => model.preview_link = Set(Some(link)),
        }
        if let Some(frameworks) = data.frameworks {
            model.frameworks = Set(to_json(&frameworks)?);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_slug_error)?;

        results
            .first()
            .ok_or(ProjectRepositoryError::NotFound)
            .and_then(to_domain)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(value).map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn to_domain(model: &Model) -> Result<Project, ProjectRepositoryError> {
    model
        .to_domain()
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

/// Unique violations on the slug index surface as `SlugAlreadyExists`.
fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}
