pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_table_categories;
mod m20250601_000002_create_table_frameworks;
mod m20250601_000003_create_table_projects;
mod m20250601_000004_create_table_achievements;
mod m20250601_000005_create_table_contacts;
mod m20250601_000006_create_table_skills;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_table_categories::Migration),
            Box::new(m20250601_000002_create_table_frameworks::Migration),
            Box::new(m20250601_000003_create_table_projects::Migration),
            Box::new(m20250601_000004_create_table_achievements::Migration),
            Box::new(m20250601_000005_create_table_contacts::Migration),
            Box::new(m20250601_000006_create_table_skills::Migration),
        ]
    }
}
