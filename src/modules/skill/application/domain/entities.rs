use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_SKILL_TITLE_LEN: usize = 100;
pub const SKILLS_PER_PAGE: u64 = 12;

/// A technology shown in the home page's skills grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    #[schema(example = "PostgreSQL")]
    pub title: String,
    #[schema(example = "https://cdn.example.com/skills/postgresql.svg")]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Icon and label, in the order skills were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechSkill {
    pub title: String,
    pub image_url: String,
}

impl From<Skill> for TechSkill {
    fn from(s: Skill) -> Self {
        Self {
            title: s.title,
            image_url: s.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must not exceed 100 characters")]
    TitleTooLong,

    #[error("Image URL is required")]
    ImageUrlRequired,
}

pub fn normalize_title(raw: &str) -> Result<String, SkillValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(SkillValidationError::TitleRequired);
    }
    if title.chars().count() > MAX_SKILL_TITLE_LEN {
        return Err(SkillValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

pub fn normalize_image_url(raw: &str) -> Result<String, SkillValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(SkillValidationError::ImageUrlRequired);
    }
    Ok(url.to_string())
}
