pub mod entities;
pub mod sitemap_xml;
