use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_FRAMEWORK_TITLE_LEN: usize = 100;
pub const FRAMEWORKS_PER_PAGE: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Framework {
    pub id: Uuid,
    #[schema(example = "Next.js")]
    pub title: String,
    #[schema(example = "https://cdn.example.com/frameworks/nextjs.svg")]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Framework as offered to the project form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FrameworkOption {
    pub title: String,
    pub image_url: String,
}

impl From<Framework> for FrameworkOption {
    fn from(f: Framework) -> Self {
        Self {
            title: f.title,
            image_url: f.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must not exceed 100 characters")]
    TitleTooLong,

    #[error("Image URL is required")]
    ImageUrlRequired,
}

pub fn normalize_title(raw: &str) -> Result<String, FrameworkValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(FrameworkValidationError::TitleRequired);
    }
    if title.chars().count() > MAX_FRAMEWORK_TITLE_LEN {
        return Err(FrameworkValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

pub fn normalize_image_url(raw: &str) -> Result<String, FrameworkValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(FrameworkValidationError::ImageUrlRequired);
    }
    Ok(url.to_string())
}
