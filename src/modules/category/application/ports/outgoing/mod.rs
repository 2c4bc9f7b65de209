mod category_query;
mod category_repository;

pub use category_query::{CategoryQuery, CategoryQueryError};
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
