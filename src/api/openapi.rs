use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::{
    achievement::{
        adapter::incoming::web::routes::{CreateAchievementRequest, UpdateAchievementRequest},
        application::domain::entities::Achievement,
    },
    category::{
        adapter::incoming::web::routes::{
            CreateCategoryRequest, DeleteCategoryRequest, UpdateCategoryRequest,
        },
        application::domain::entities::Category,
    },
    contact::{
        adapter::incoming::web::routes::{
            ContactList, SubmitContactRequest, UpdateContactStatusRequest,
        },
        application::domain::entities::{Contact, ContactStatus},
    },
    framework::{
        adapter::incoming::web::routes::{CreateFrameworkRequest, UpdateFrameworkRequest},
        application::domain::entities::{Framework, FrameworkOption},
    },
    project::{
        adapter::incoming::web::routes::{CreateProjectRequest, UpdateProjectRequest},
        application::domain::entities::{
            Project, ProjectCard, ProjectDetail, ProjectFramework, RelatedProject,
        },
    },
    skill::{
        adapter::incoming::web::routes::{CreateSkillRequest, UpdateSkillRequest},
        application::domain::entities::{Skill, TechSkill},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Content management API behind the portfolio site and its dashboard"
    ),
    paths(
        // Categories
        crate::modules::category::adapter::incoming::web::routes::get_categories_handler,
        crate::modules::category::adapter::incoming::web::routes::get_category_names_handler,
        crate::modules::category::adapter::incoming::web::routes::create_category_handler,
        crate::modules::category::adapter::incoming::web::routes::update_category_handler,
        crate::modules::category::adapter::incoming::web::routes::delete_category_handler,

        // Frameworks
        crate::modules::framework::adapter::incoming::web::routes::get_frameworks_handler,
        crate::modules::framework::adapter::incoming::web::routes::get_framework_options_handler,
        crate::modules::framework::adapter::incoming::web::routes::create_framework_handler,
        crate::modules::framework::adapter::incoming::web::routes::update_framework_handler,
        crate::modules::framework::adapter::incoming::web::routes::delete_framework_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_detail_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Achievements
        crate::modules::achievement::adapter::incoming::web::routes::get_achievements_handler,
        crate::modules::achievement::adapter::incoming::web::routes::get_achievement_groups_handler,
        crate::modules::achievement::adapter::incoming::web::routes::create_achievement_handler,
        crate::modules::achievement::adapter::incoming::web::routes::update_achievement_handler,
        crate::modules::achievement::adapter::incoming::web::routes::delete_achievement_handler,

        // Skills
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::get_tech_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::create_skill_handler,
        crate::modules::skill::adapter::incoming::web::routes::update_skill_handler,
        crate::modules::skill::adapter::incoming::web::routes::delete_skill_handler,

        // Contact messages
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::get_contacts_handler,
        crate::modules::contact::adapter::incoming::web::routes::update_contact_status_handler,
        crate::modules::contact::adapter::incoming::web::routes::delete_contact_handler,

        // Sitemap
        crate::modules::sitemap::adapter::incoming::web::routes::get_sitemap_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            Category,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            DeleteCategoryRequest,

            Framework,
            FrameworkOption,
            CreateFrameworkRequest,
            UpdateFrameworkRequest,

            Project,
            ProjectCard,
            ProjectDetail,
            ProjectFramework,
            RelatedProject,
            CreateProjectRequest,
            UpdateProjectRequest,

            Achievement,
            CreateAchievementRequest,
            UpdateAchievementRequest,

            Skill,
            TechSkill,
            CreateSkillRequest,
            UpdateSkillRequest,

            Contact,
            ContactStatus,
            ContactList,
            SubmitContactRequest,
            UpdateContactStatusRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "categories", description = "Project categories"),
        (name = "frameworks", description = "Frameworks shown on project cards"),
        (name = "projects", description = "Portfolio projects"),
        (name = "achievements", description = "Certificates and awards"),
        (name = "skills", description = "Technologies in the home page skills grid"),
        (name = "contact", description = "Messages from the public contact form"),
        (name = "sitemap", description = "Search engine sitemap"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "ApiSecret",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Shared API secret from the API_SECRET setting"))
                        .build(),
                ),
            )
        }
    }
}
