pub mod skill_query_postgres;
pub mod skill_repository_postgres;
pub mod sea_orm_entity;

pub use skill_query_postgres::SkillQueryPostgres;
pub use skill_repository_postgres::SkillRepositoryPostgres;
