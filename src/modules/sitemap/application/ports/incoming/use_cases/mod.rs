mod build_sitemap_use_case;

pub use build_sitemap_use_case::{BuildSitemapError, BuildSitemapUseCase};
