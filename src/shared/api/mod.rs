pub mod api_secret;
pub mod json_config;
pub mod query;
pub mod response;

pub use api_secret::{ApiSecret, ApiSecretGuard};
pub use json_config::{custom_json_config, custom_path_config, custom_query_config};
pub use query::{IdQuery, PageQuery};
pub use response::ApiResponse;
