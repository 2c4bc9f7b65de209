pub mod sitemap_source_postgres;

pub use sitemap_source_postgres::SitemapSourcePostgres;
