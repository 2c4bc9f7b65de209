mod get_sitemap;

pub use get_sitemap::*;
