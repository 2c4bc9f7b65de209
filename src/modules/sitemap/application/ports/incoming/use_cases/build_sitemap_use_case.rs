use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildSitemapError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait BuildSitemapUseCase: Send + Sync {
    /// Renders the sitemap document with every `<loc>` rooted at `base_url`.
    async fn execute(&self, base_url: &str) -> Result<String, BuildSitemapError>;
}
