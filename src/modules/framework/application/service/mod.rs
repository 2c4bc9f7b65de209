mod create_framework_service;
mod delete_framework_service;
mod get_framework_options_service;
mod get_frameworks_service;
mod update_framework_service;

pub use create_framework_service::CreateFrameworkService;
pub use delete_framework_service::DeleteFrameworkService;
pub use get_framework_options_service::GetFrameworkOptionsService;
pub use get_frameworks_service::GetFrameworksService;
pub use update_framework_service::UpdateFrameworkService;
