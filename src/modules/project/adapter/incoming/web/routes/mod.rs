mod create_project;
mod delete_project;
mod get_project_by_id;
mod get_project_detail;
mod get_projects;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_project_by_id::*;
pub use get_project_detail::*;
pub use get_projects::*;
pub use update_project::*;
