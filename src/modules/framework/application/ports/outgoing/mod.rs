mod framework_query;
mod framework_repository;

pub use framework_query::{FrameworkQuery, FrameworkQueryError};
pub use framework_repository::{
    FrameworkRepository, FrameworkRepositoryError, NewFrameworkData, PatchFrameworkData,
};
