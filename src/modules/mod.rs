pub mod achievement;
pub mod category;
pub mod contact;
pub mod framework;
pub mod project;
pub mod sitemap;
pub mod skill;
