mod build_sitemap_service;

pub use build_sitemap_service::BuildSitemapService;
