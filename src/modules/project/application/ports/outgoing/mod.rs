mod project_query;
mod project_repository;

pub use project_query::{ProjectListFilter, ProjectQuery, ProjectQueryError};
pub use project_repository::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
