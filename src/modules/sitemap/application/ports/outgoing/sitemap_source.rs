use async_trait::async_trait;

use crate::modules::sitemap::application::domain::entities::PublishedPage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SitemapSourceError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SitemapSource: Send + Sync {
    /// Every project page, newest first.
    async fn project_pages(&self) -> Result<Vec<PublishedPage>, SitemapSourceError>;
}
