use actix_web::web;
use std::sync::Arc;

use crate::modules::{
    achievement::application::{
        achievement_use_cases::AchievementUseCases,
        ports::incoming::use_cases::{
            CreateAchievementUseCase, DeleteAchievementUseCase, GetAchievementGroupsUseCase,
            GetAchievementsUseCase, UpdateAchievementUseCase,
        },
    },
    category::application::{
        category_use_cases::CategoryUseCases,
        ports::incoming::use_cases::{
            CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase,
            GetCategoryNamesUseCase, UpdateCategoryUseCase,
        },
    },
    contact::application::{
        contact_use_cases::ContactUseCases,
        ports::incoming::use_cases::{
            DeleteContactUseCase, GetContactsUseCase, SubmitContactUseCase,
            UpdateContactStatusUseCase,
        },
    },
    framework::application::{
        framework_use_cases::FrameworkUseCases,
        ports::incoming::use_cases::{
            CreateFrameworkUseCase, DeleteFrameworkUseCase, GetFrameworkOptionsUseCase,
            GetFrameworksUseCase, UpdateFrameworkUseCase,
        },
    },
    project::application::{
        ports::incoming::use_cases::{
            CreateProjectUseCase, DeleteProjectUseCase, GetProjectByIdUseCase,
            GetProjectDetailUseCase, GetProjectsUseCase, UpdateProjectUseCase,
        },
        project_use_cases::ProjectUseCases,
    },
    sitemap::application::ports::incoming::use_cases::BuildSitemapUseCase,
    skill::application::{
        ports::incoming::use_cases::{
            CreateSkillUseCase, DeleteSkillUseCase, GetSkillsUseCase, GetTechSkillsUseCase,
            UpdateSkillUseCase,
        },
        skill_use_cases::SkillUseCases,
    },
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    category: CategoryUseCases,
    framework: FrameworkUseCases,
    project: ProjectUseCases,
    achievement: AchievementUseCases,
    skill: SkillUseCases,
    contact: ContactUseCases,
    sitemap: Arc<dyn BuildSitemapUseCase + Send + Sync>,
    site_url: Option<String>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            category: CategoryUseCases {
                get_list: Arc::new(StubGetCategoriesUseCase),
                get_names: Arc::new(StubGetCategoryNamesUseCase),
                create: Arc::new(StubCreateCategoryUseCase),
                update: Arc::new(StubUpdateCategoryUseCase),
                delete: Arc::new(StubDeleteCategoryUseCase),
            },
            framework: FrameworkUseCases {
                get_list: Arc::new(StubGetFrameworksUseCase),
                get_options: Arc::new(StubGetFrameworkOptionsUseCase),
                create: Arc::new(StubCreateFrameworkUseCase),
                update: Arc::new(StubUpdateFrameworkUseCase),
                delete: Arc::new(StubDeleteFrameworkUseCase),
            },
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase),
                get_by_id: Arc::new(StubGetProjectByIdUseCase),
                get_detail: Arc::new(StubGetProjectDetailUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            achievement: AchievementUseCases {
                get_list: Arc::new(StubGetAchievementsUseCase),
                get_groups: Arc::new(StubGetAchievementGroupsUseCase),
                create: Arc::new(StubCreateAchievementUseCase),
                update: Arc::new(StubUpdateAchievementUseCase),
                delete: Arc::new(StubDeleteAchievementUseCase),
            },
            skill: SkillUseCases {
                get_list: Arc::new(StubGetSkillsUseCase),
                get_tech: Arc::new(StubGetTechSkillsUseCase),
                create: Arc::new(StubCreateSkillUseCase),
                update: Arc::new(StubUpdateSkillUseCase),
                delete: Arc::new(StubDeleteSkillUseCase),
            },
            contact: ContactUseCases {
                get_list: Arc::new(StubGetContactsUseCase),
                submit: Arc::new(StubSubmitContactUseCase),
                update_status: Arc::new(StubUpdateContactStatusUseCase),
                delete: Arc::new(StubDeleteContactUseCase),
            },
            sitemap: Arc::new(StubBuildSitemapUseCase),
            site_url: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_categories(mut self, uc: impl GetCategoriesUseCase + 'static) -> Self {
        self.category.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_category_names(mut self, uc: impl GetCategoryNamesUseCase + 'static) -> Self {
        self.category.get_names = Arc::new(uc);
        self
    }

    pub fn with_create_category(mut self, uc: impl CreateCategoryUseCase + 'static) -> Self {
        self.category.create = Arc::new(uc);
        self
    }

    pub fn with_update_category(mut self, uc: impl UpdateCategoryUseCase + 'static) -> Self {
        self.category.update = Arc::new(uc);
        self
    }

    pub fn with_delete_category(mut self, uc: impl DeleteCategoryUseCase + 'static) -> Self {
        self.category.delete = Arc::new(uc);
        self
    }

    pub fn with_get_frameworks(mut self, uc: impl GetFrameworksUseCase + 'static) -> Self {
        self.framework.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_framework_options(
        mut self,
        uc: impl GetFrameworkOptionsUseCase + 'static,
    ) -> Self {
        self.framework.get_options = Arc::new(uc);
        self
    }

    pub fn with_create_framework(mut self, uc: impl CreateFrameworkUseCase + 'static) -> Self {
        self.framework.create = Arc::new(uc);
        self
    }

    pub fn with_update_framework(mut self, uc: impl UpdateFrameworkUseCase + 'static) -> Self {
        self.framework.update = Arc::new(uc);
        self
    }

    pub fn with_delete_framework(mut self, uc: impl DeleteFrameworkUseCase + 'static) -> Self {
        self.framework.delete = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_project_by_id(mut self, uc: impl GetProjectByIdUseCase + 'static) -> Self {
        self.project.get_by_id = Arc::new(uc);
        self
    }

    pub fn with_get_project_detail(mut self, uc: impl GetProjectDetailUseCase + 'static) -> Self {
        self.project.get_detail = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_get_achievements(mut self, uc: impl GetAchievementsUseCase + 'static) -> Self {
        self.achievement.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_achievement_groups(
        mut self,
        uc: impl GetAchievementGroupsUseCase + 'static,
    ) -> Self {
        self.achievement.get_groups = Arc::new(uc);
        self
    }

    pub fn with_create_achievement(mut self, uc: impl CreateAchievementUseCase + 'static) -> Self {
        self.achievement.create = Arc::new(uc);
        self
    }

    pub fn with_update_achievement(mut self, uc: impl UpdateAchievementUseCase + 'static) -> Self {
        self.achievement.update = Arc::new(uc);
        self
    }

    pub fn with_delete_achievement(mut self, uc: impl DeleteAchievementUseCase + 'static) -> Self {
        self.achievement.delete = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + 'static) -> Self {
        self.skill.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_tech_skills(mut self, uc: impl GetTechSkillsUseCase + 'static) -> Self {
        self.skill.get_tech = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + 'static) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + 'static) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    pub fn with_get_contacts(mut self, uc: impl GetContactsUseCase + 'static) -> Self {
        self.contact.get_list = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(mut self, uc: impl SubmitContactUseCase + 'static) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_update_contact_status(
        mut self,
        uc: impl UpdateContactStatusUseCase + 'static,
    ) -> Self {
        self.contact.update_status = Arc::new(uc);
        self
    }

    pub fn with_delete_contact(mut self, uc: impl DeleteContactUseCase + 'static) -> Self {
        self.contact.delete = Arc::new(uc);
        self
    }

    pub fn with_sitemap(mut self, uc: impl BuildSitemapUseCase + 'static) -> Self {
        self.sitemap = Arc::new(uc);
        self
    }

    pub fn with_site_url(mut self, url: &str) -> Self {
        self.site_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            category: self.category,
            framework: self.framework,
            project: self.project,
            achievement: self.achievement,
            skill: self.skill,
            contact: self.contact,
            sitemap: self.sitemap,
            site_url: self.site_url,
        })
    }
}
