use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_CATEGORY_NAME_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    #[schema(example = "Web Development")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryNameError {
    #[error("Name is required")]
    Required,

    #[error("Name must not exceed 100 characters")]
    TooLong,
}

/// Trims and checks a category name.
pub fn normalize_category_name(raw: &str) -> Result<String, CategoryNameError> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(CategoryNameError::Required);
    }

    if name.chars().count() > MAX_CATEGORY_NAME_LEN {
        return Err(CategoryNameError::TooLong);
    }

    Ok(name.to_string())
}
