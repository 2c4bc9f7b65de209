mod create_project_use_case;
mod delete_project_use_case;
mod get_project_by_id_use_case;
mod get_project_detail_use_case;
mod get_projects_use_case;
mod update_project_use_case;

pub use create_project_use_case::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, NewProjectInput,
};
pub use delete_project_use_case::{DeleteProjectError, DeleteProjectUseCase};
pub use get_project_by_id_use_case::{GetProjectByIdError, GetProjectByIdUseCase};
pub use get_project_detail_use_case::{GetProjectDetailError, GetProjectDetailUseCase};
pub use get_projects_use_case::{GetProjectsError, GetProjectsUseCase};
pub use update_project_use_case::{
    ProjectChanges, UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase,
};
