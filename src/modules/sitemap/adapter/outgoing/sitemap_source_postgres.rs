use async_trait::async_trait;
use sea_orm::{
    prelude::DateTimeWithTimeZone, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::{
    project::adapter::outgoing::sea_orm_entity::{Column, Entity},
    sitemap::application::{
        domain::entities::PublishedPage,
        ports::outgoing::{SitemapSource, SitemapSourceError},
    },
};

/// Reads project slugs straight from the `projects` table.
#[derive(Debug, Clone)]
pub struct SitemapSourcePostgres {
    db: Arc<DatabaseConnection>,
}

impl SitemapSourcePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SitemapSource for SitemapSourcePostgres {
    async fn project_pages(&self) -> Result<Vec<PublishedPage>, SitemapSourceError> {
        let rows = Entity::find()
            .select_only()
            .column(Column::Slug)
            .column(Column::UpdatedAt)
            .order_by_desc(Column::CreatedAt)
            .into_tuple::<(String, DateTimeWithTimeZone)>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(slug, updated_at)| PublishedPage {
                slug,
                updated_at: updated_at.into(),
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> SitemapSourceError {
    SitemapSourceError::DatabaseError(e.to_string())
}
