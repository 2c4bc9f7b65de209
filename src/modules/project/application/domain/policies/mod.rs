pub mod project_policy;

pub use project_policy::{
    normalize_frameworks, normalize_image_urls, normalize_optional_link, normalize_slug,
    required_field, ProjectField, ProjectValidationError, MAX_SLUG_LEN, MAX_TITLE_LEN,
};
