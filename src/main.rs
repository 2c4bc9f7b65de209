pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::{
    achievement::{
        adapter::outgoing::{AchievementQueryPostgres, AchievementRepositoryPostgres},
        application::{
            achievement_use_cases::AchievementUseCases,
            service::{
                CreateAchievementService, DeleteAchievementService, GetAchievementGroupsService,
                GetAchievementsService, UpdateAchievementService,
            },
        },
    },
    category::{
        adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres},
        application::{
            category_use_cases::CategoryUseCases,
            service::{
                CreateCategoryService, DeleteCategoryService, GetCategoriesService,
                GetCategoryNamesService, UpdateCategoryService,
            },
        },
    },
    contact::{
        adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres},
        application::{
            contact_use_cases::ContactUseCases,
            service::{
                DeleteContactService, GetContactsService, SubmitContactService,
                UpdateContactStatusService,
            },
        },
    },
    framework::{
        adapter::outgoing::{FrameworkQueryPostgres, FrameworkRepositoryPostgres},
        application::{
            framework_use_cases::FrameworkUseCases,
            service::{
                CreateFrameworkService, DeleteFrameworkService, GetFrameworkOptionsService,
                GetFrameworksService, UpdateFrameworkService,
            },
        },
    },
    project::{
        adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres},
        application::{
            project_use_cases::ProjectUseCases,
            service::{
                CreateProjectService, DeleteProjectService, GetProjectByIdService,
                GetProjectDetailService, GetProjectsService, UpdateProjectService,
            },
        },
    },
    sitemap::{
        adapter::outgoing::SitemapSourcePostgres,
        application::{
            ports::incoming::use_cases::BuildSitemapUseCase, service::BuildSitemapService,
        },
    },
    skill::{
        adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres},
        application::{
            service::{
                CreateSkillService, DeleteSkillService, GetSkillsService, GetTechSkillsService,
                UpdateSkillService,
            },
            skill_use_cases::SkillUseCases,
        },
    },
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config, ApiSecret};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub category: CategoryUseCases,
    pub framework: FrameworkUseCases,
    pub project: ProjectUseCases,
    pub achievement: AchievementUseCases,
    pub skill: SkillUseCases,
    pub contact: ContactUseCases,
    pub sitemap: Arc<dyn BuildSitemapUseCase + Send + Sync>,
    /// Public origin for sitemap links; request headers are used when unset.
    pub site_url: Option<String>,
}

impl AppState {
    pub fn from_database(db: Arc<DatabaseConnection>, site_url: Option<String>) -> Self {
        let category_query = CategoryQueryPostgres::new(Arc::clone(&db));
        let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db));
        let framework_query = FrameworkQueryPostgres::new(Arc::clone(&db));
        let framework_repo = FrameworkRepositoryPostgres::new(Arc::clone(&db));
        let project_query = ProjectQueryPostgres::new(Arc::clone(&db));
        let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let achievement_query = AchievementQueryPostgres::new(Arc::clone(&db));
        let achievement_repo = AchievementRepositoryPostgres::new(Arc::clone(&db));
        let skill_query = SkillQueryPostgres::new(Arc::clone(&db));
        let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db));
        let contact_query = ContactQueryPostgres::new(Arc::clone(&db));
        let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));
        let sitemap_source = SitemapSourcePostgres::new(db);

        Self {
            category: CategoryUseCases {
                get_list: Arc::new(GetCategoriesService::new(category_query.clone())),
                get_names: Arc::new(GetCategoryNamesService::new(category_query)),
                create: Arc::new(CreateCategoryService::new(category_repo.clone())),
                update: Arc::new(UpdateCategoryService::new(category_repo.clone())),
                delete: Arc::new(DeleteCategoryService::new(category_repo)),
            },
            framework: FrameworkUseCases {
                get_list: Arc::new(GetFrameworksService::new(framework_query.clone())),
                get_options: Arc::new(GetFrameworkOptionsService::new(framework_query)),
                create: Arc::new(CreateFrameworkService::new(framework_repo.clone())),
                update: Arc::new(UpdateFrameworkService::new(framework_repo.clone())),
                delete: Arc::new(DeleteFrameworkService::new(framework_repo)),
            },
            project: ProjectUseCases {
                get_list: Arc::new(GetProjectsService::new(project_query.clone())),
                get_by_id: Arc::new(GetProjectByIdService::new(project_query.clone())),
                get_detail: Arc::new(GetProjectDetailService::new(project_query.clone())),
                create: Arc::new(CreateProjectService::new(
                    project_query.clone(),
                    project_repo.clone(),
                )),
                update: Arc::new(UpdateProjectService::new(
                    project_query,
                    project_repo.clone(),
                )),
                delete: Arc::new(DeleteProjectService::new(project_repo)),
            },
            achievement: AchievementUseCases {
                get_list: Arc::new(GetAchievementsService::new(achievement_query.clone())),
                get_groups: Arc::new(GetAchievementGroupsService::new(achievement_query)),
                create: Arc::new(CreateAchievementService::new(achievement_repo.clone())),
                update: Arc::new(UpdateAchievementService::new(achievement_repo.clone())),
                delete: Arc::new(DeleteAchievementService::new(achievement_repo)),
            },
            skill: SkillUseCases {
                get_list: Arc::new(GetSkillsService::new(skill_query.clone())),
                get_tech: Arc::new(GetTechSkillsService::new(skill_query)),
                create: Arc::new(CreateSkillService::new(skill_repo.clone())),
                update: Arc::new(UpdateSkillService::new(skill_repo.clone())),
                delete: Arc::new(DeleteSkillService::new(skill_repo)),
            },
            contact: ContactUseCases {
                get_list: Arc::new(GetContactsService::new(contact_query.clone())),
                submit: Arc::new(SubmitContactService::new(contact_repo.clone())),
                update_status: Arc::new(UpdateContactStatusService::new(
                    contact_query,
                    contact_repo.clone(),
                )),
                delete: Arc::new(DeleteContactService::new(contact_repo)),
            },
            sitemap: Arc::new(BuildSitemapService::new(sitemap_source)),
            site_url,
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application ({env})...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(?config, "configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = AppState::from_database(Arc::clone(&db_arc), config.site_url.clone());
    let api_secret = web::Data::new(ApiSecret::new(&config.api_secret));
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(api_secret.clone())
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await
    .context("server stopped with an error")
}

/// Literal segments (`categories`, `frameworks`, `edit`, `groups`, `tech`) are
/// registered before `{slug}` so they are not captured as slugs.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        achievement::adapter::incoming::web::routes as achievement,
        category::adapter::incoming::web::routes as category,
        contact::adapter::incoming::web::routes as contact,
        framework::adapter::incoming::web::routes as framework,
        project::adapter::incoming::web::routes as project,
        sitemap::adapter::incoming::web::routes as sitemap,
        skill::adapter::incoming::web::routes as skill,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Categories
    cfg.service(category::get_categories_handler);
    cfg.service(category::create_category_handler);
    cfg.service(category::update_category_handler);
    cfg.service(category::delete_category_handler);
    cfg.service(category::get_category_names_handler);
    // Frameworks
    cfg.service(framework::get_frameworks_handler);
    cfg.service(framework::create_framework_handler);
    cfg.service(framework::update_framework_handler);
    cfg.service(framework::delete_framework_handler);
    cfg.service(framework::get_framework_options_handler);
    // Projects
    cfg.service(project::get_project_by_id_handler);
    cfg.service(project::get_projects_handler);
    cfg.service(project::create_project_handler);
    cfg.service(project::update_project_handler);
    cfg.service(project::delete_project_handler);
    cfg.service(project::get_project_detail_handler);
    // Achievements
    cfg.service(achievement::get_achievement_groups_handler);
    cfg.service(achievement::get_achievements_handler);
    cfg.service(achievement::create_achievement_handler);
    cfg.service(achievement::update_achievement_handler);
    cfg.service(achievement::delete_achievement_handler);
    // Skills
    cfg.service(skill::get_tech_skills_handler);
    cfg.service(skill::get_skills_handler);
    cfg.service(skill::create_skill_handler);
    cfg.service(skill::update_skill_handler);
    cfg.service(skill::delete_skill_handler);
    // Contact
    cfg.service(contact::submit_contact_handler);
    cfg.service(contact::get_contacts_handler);
    cfg.service(contact::update_contact_status_handler);
    cfg.service(contact::delete_contact_handler);
    // Sitemap
    cfg.service(sitemap::get_sitemap_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
