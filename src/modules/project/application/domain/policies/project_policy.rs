use regex::Regex;
use std::sync::LazyLock;

use crate::modules::{
    category::application::domain::entities::MAX_CATEGORY_NAME_LEN,
    project::application::domain::entities::ProjectFramework,
};

pub const MAX_TITLE_LEN: usize = 150;
pub const MAX_SLUG_LEN: usize = 150;

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Slug,
    Description,
    Content,
    Category,
    Thumbnail,
}

impl ProjectField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectField::Title => "title",
            ProjectField::Slug => "slug",
            ProjectField::Description => "description",
            ProjectField::Content => "content",
            ProjectField::Category => "category",
            ProjectField::Thumbnail => "thumbnail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectValidationError {
    #[error("{} is required", .0.as_str())]
    Required(ProjectField),

    #[error("Title must not exceed 150 characters")]
    TitleTooLong,

    #[error("Category must not exceed 100 characters")]
    CategoryTooLong,

    #[error("Slug must not exceed 150 characters")]
    SlugTooLong,

    #[error("Slug may only contain lowercase letters, digits and single hyphens")]
    InvalidSlug,

    #[error("Framework at position {0} needs a title and an image URL")]
    InvalidFramework(usize),
}

/// Trims a required text field, rejecting blanks.
pub fn required_field(raw: &str, field: ProjectField) -> Result<String, ProjectValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ProjectValidationError::Required(field));
    }
    if field == ProjectField::Title && value.chars().count() > MAX_TITLE_LEN {
        return Err(ProjectValidationError::TitleTooLong);
    }
    if field == ProjectField::Category && value.chars().count() > MAX_CATEGORY_NAME_LEN {
        return Err(ProjectValidationError::CategoryTooLong);
    }
    Ok(value.to_string())
}

/// Trims and lowercases a slug, then checks it against the URL-safe pattern.
pub fn normalize_slug(raw: &str) -> Result<String, ProjectValidationError> {
    let slug = raw.trim().to_lowercase();

    if slug.is_empty() {
        return Err(ProjectValidationError::Required(ProjectField::Slug));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(ProjectValidationError::SlugTooLong);
    }
    if !SLUG_PATTERN.is_match(&slug) {
        return Err(ProjectValidationError::InvalidSlug);
    }

    Ok(slug)
}

/// Blank links collapse to `None`.
pub fn normalize_optional_link(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn normalize_image_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect()
}

pub fn normalize_frameworks(
    frameworks: Vec<ProjectFramework>,
) -> Result<Vec<ProjectFramework>, ProjectValidationError> {
    frameworks
        .into_iter()
        .enumerate()
        .map(|(i, f)| {
            let title = f.title.trim();
            let image_url = f.image_url.trim();
            if title.is_empty() || image_url.is_empty() {
                return Err(ProjectValidationError::InvalidFramework(i));
            }
            Ok(ProjectFramework {
                title: title.to_string(),
                image_url: image_url.to_string(),
            })
        })
        .collect()
}
