pub mod framework_query_postgres;
pub mod framework_repository_postgres;
pub mod sea_orm_entity;

pub use framework_query_postgres::FrameworkQueryPostgres;
pub use framework_repository_postgres::FrameworkRepositoryPostgres;
