mod sitemap_source;

pub use sitemap_source::{SitemapSource, SitemapSourceError};
