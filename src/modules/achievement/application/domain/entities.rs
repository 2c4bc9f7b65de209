use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_ACHIEVEMENT_TITLE_LEN: usize = 200;
pub const ACHIEVEMENTS_PER_PAGE: u64 = 6;

const GROUP_SEPARATOR: &str = " - ";

/// A certificate or award. Titles follow `"<issuer> - <name>"`; the part
/// before the first separator is the achievement's group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub id: Uuid,
    #[schema(example = "AWS - Solutions Architect Associate")]
    pub title: String,
    #[schema(example = "https://cdn.example.com/achievements/aws-saa.png")]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Achievement {
    pub fn group(&self) -> &str {
        group_of(&self.title)
    }
}

/// Prefix before the first `" - "`, trimmed. A title without the separator
/// is its own group.
pub fn group_of(title: &str) -> &str {
    title
        .split_once(GROUP_SEPARATOR)
        .map_or(title, |(prefix, _)| prefix)
        .trim()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AchievementValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must not exceed 200 characters")]
    TitleTooLong,

    #[error("Image URL is required")]
    ImageUrlRequired,
}

pub fn normalize_title(raw: &str) -> Result<String, AchievementValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AchievementValidationError::TitleRequired);
    }
    if title.chars().count() > MAX_ACHIEVEMENT_TITLE_LEN {
        return Err(AchievementValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

pub fn normalize_image_url(raw: &str) -> Result<String, AchievementValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(AchievementValidationError::ImageUrlRequired);
    }
    Ok(url.to_string())
}
