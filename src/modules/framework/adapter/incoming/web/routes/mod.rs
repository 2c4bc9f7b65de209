mod create_framework;
mod delete_framework;
mod get_framework_options;
mod get_frameworks;
mod update_framework;

pub use create_framework::*;
pub use delete_framework::*;
pub use get_framework_options::*;
pub use get_frameworks::*;
pub use update_framework::*;
