use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::modules::{
    achievement::application::domain::entities::Achievement,
    category::application::domain::entities::Category,
    contact::application::domain::entities::{Contact, ContactStatus},
    framework::application::domain::entities::Framework,
    project::application::domain::entities::{Project, ProjectFramework},
    skill::application::domain::entities::Skill,
};

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

pub fn sample_category(name: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_framework(title: &str) -> Framework {
    Framework {
        id: Uuid::new_v4(),
        title: title.to_string(),
        image_url: format!("https://cdn.example.com/frameworks/{}.svg", title.to_lowercase()),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_project(slug: &str) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: format!("Project {}", slug),
        slug: slug.to_string(),
        description: "A short summary".to_string(),
        content: "<p>Full write-up</p>".to_string(),
        category: "Web".to_string(),
        thumbnail: format!("https://cdn.example.com/projects/{}.png", slug),
        image_urls: vec![format!("https://cdn.example.com/projects/{}-1.png", slug)],
        preview_link: Some(format!("https://{}.example.com", slug)),
        frameworks: vec![ProjectFramework {
            title: "Rust".to_string(),
            image_url: "https://cdn.example.com/frameworks/rust.svg".to_string(),
        }],
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_achievement(title: &str) -> Achievement {
    Achievement {
        id: Uuid::new_v4(),
        title: title.to_string(),
        image_url: "https://cdn.example.com/achievements/cert.png".to_string(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_skill(title: &str) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        title: title.to_string(),
        image_url: format!("https://cdn.example.com/skills/{}.svg", title.to_lowercase()),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_contact() -> Contact {
    Contact {
        id: Uuid::new_v4(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Collaboration".to_string(),
        message: "Hi, I'd like to work with you.".to_string(),
        status: ContactStatus::Unread,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}
