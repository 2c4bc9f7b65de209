pub mod achievement_query_postgres;
pub mod achievement_repository_postgres;
pub mod sea_orm_entity;

pub use achievement_query_postgres::AchievementQueryPostgres;
pub use achievement_repository_postgres::AchievementRepositoryPostgres;
