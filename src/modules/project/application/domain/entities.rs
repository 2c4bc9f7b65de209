use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const PROJECTS_PER_PAGE: u64 = 6;

/// Same-category projects shown under a project page.
pub const RELATED_SAME_CATEGORY_LIMIT: u64 = 4;

/// Newest projects shown when the category has no other entries.
pub const RELATED_FALLBACK_LIMIT: u64 = 3;

/// Framework badge embedded in a project (denormalized copy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectFramework {
    #[serde(default)]
    #[schema(example = "Rust")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "https://cdn.example.com/frameworks/rust.svg")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    #[schema(example = "portfolio-cms")]
    pub slug: String,
    pub description: String,
    /// Rich text body; omitted from list responses
    pub content: String,
    /// Category name, not a foreign key
    pub category: String,
    pub thumbnail: String,
    pub image_urls: Vec<String>,
    pub preview_link: Option<String>,
    pub frameworks: Vec<ProjectFramework>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectCard {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub thumbnail: String,
    pub image_urls: Vec<String>,
    pub preview_link: Option<String>,
    pub frameworks: Vec<ProjectFramework>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectCard {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            slug: p.slug,
            description: p.description,
            category: p.category,
            thumbnail: p.thumbnail,
            image_urls: p.image_urls,
            preview_link: p.preview_link,
            frameworks: p.frameworks,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RelatedProject {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: String,
    pub category: String,
    pub preview_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub related_projects: Vec<RelatedProject>,
}
