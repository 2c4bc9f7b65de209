use sea_orm::entity::prelude::*;

use crate::modules::project::application::domain::entities::{Project, ProjectFramework};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub category: String,

    pub thumbnail: String,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub image_urls: Json,

    #[sea_orm(nullable)]
    pub preview_link: Option<String>,

    // JSONB array of {title, image_url}
    #[sea_orm(column_type = "JsonBinary")]
    pub frameworks: Json,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<Project, serde_json::Error> {
        let image_urls: Vec<String> = serde_json::from_value(self.image_urls.clone())?;
        let frameworks: Vec<ProjectFramework> = serde_json::from_value(self.frameworks.clone())?;

        Ok(Project {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            thumbnail: self.thumbnail.clone(),
            image_urls,
            preview_link: self.preview_link.clone(),
            frameworks,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
