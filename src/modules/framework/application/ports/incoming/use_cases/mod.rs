mod create_framework_use_case;
mod delete_framework_use_case;
mod get_framework_options_use_case;
mod get_frameworks_use_case;
mod update_framework_use_case;

pub use create_framework_use_case::{
    CreateFrameworkCommand, CreateFrameworkError, CreateFrameworkUseCase,
};
pub use delete_framework_use_case::{DeleteFrameworkError, DeleteFrameworkUseCase};
pub use get_framework_options_use_case::{GetFrameworkOptionsError, GetFrameworkOptionsUseCase};
pub use get_frameworks_use_case::{GetFrameworksError, GetFrameworksUseCase};
pub use update_framework_use_case::{
    UpdateFrameworkCommand, UpdateFrameworkError, UpdateFrameworkUseCase,
};
