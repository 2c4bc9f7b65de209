use async_trait::async_trait;
use chrono::Utc;

use crate::modules::sitemap::application::{
    domain::{
        entities::{join_url, ChangeFrequency, SitemapEntry},
        sitemap_xml,
    },
    ports::{
        incoming::use_cases::{BuildSitemapError, BuildSitemapUseCase},
        outgoing::SitemapSource,
    },
};

const HOME_PRIORITY: f32 = 1.0;
const PROJECT_PRIORITY: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct BuildSitemapService<S>
where
    S: SitemapSource + Send + Sync,
{
    source: S,
}

impl<S> BuildSitemapService<S>
where
    S: SitemapSource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> BuildSitemapUseCase for BuildSitemapService<S>
where
    S: SitemapSource + Send + Sync,
{
    async fn execute(&self, base_url: &str) -> Result<String, BuildSitemapError> {
        let pages = self
            .source
            .project_pages()
            .await
            .map_err(|e| BuildSitemapError::QueryError(e.to_string()))?;

        let home = SitemapEntry {
            loc: join_url(base_url, "/"),
            lastmod: Utc::now(),
            changefreq: ChangeFrequency::Daily,
            priority: HOME_PRIORITY,
        };

        let entries: Vec<SitemapEntry> = std::iter::once(home)
            .chain(pages.into_iter().map(|page| SitemapEntry {
                loc: join_url(base_url, &page.slug),
                lastmod: page.updated_at,
                changefreq: ChangeFrequency::Weekly,
                priority: PROJECT_PRIORITY,
            }))
            .collect();

        Ok(sitemap_xml::render(&entries))
    }
}
