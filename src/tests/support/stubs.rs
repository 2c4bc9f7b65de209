//! Inert use cases the builder falls back to. Reads come back empty and
//! lookups by id report not found, so a handler under test only sees data
//! that the test injected itself.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::{
    achievement::application::{
        domain::entities::Achievement,
        ports::incoming::use_cases::{
            CreateAchievementCommand, CreateAchievementError, CreateAchievementUseCase,
            DeleteAchievementError, DeleteAchievementUseCase, GetAchievementGroupsError,
            GetAchievementGroupsUseCase, GetAchievementsError, GetAchievementsUseCase,
            UpdateAchievementCommand, UpdateAchievementError, UpdateAchievementUseCase,
        },
    },
    category::application::{
        domain::entities::Category,
        ports::incoming::use_cases::{
            CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase,
            DeleteCategoryError, DeleteCategoryUseCase, GetCategoriesError, GetCategoriesUseCase,
            GetCategoryNamesError, GetCategoryNamesUseCase, UpdateCategoryCommand,
            UpdateCategoryError, UpdateCategoryUseCase,
        },
    },
    contact::application::{
        domain::entities::{Contact, ContactStatus},
        ports::incoming::use_cases::{
            DeleteContactError, DeleteContactUseCase, GetContactsError, GetContactsUseCase,
            SubmitContactCommand, SubmitContactError, SubmitContactUseCase,
            UpdateContactStatusError, UpdateContactStatusUseCase,
        },
    },
    framework::application::{
        domain::entities::{Framework, FrameworkOption},
        ports::incoming::use_cases::{
            CreateFrameworkCommand, CreateFrameworkError, CreateFrameworkUseCase,
            DeleteFrameworkError, DeleteFrameworkUseCase, GetFrameworkOptionsError,
            GetFrameworkOptionsUseCase, GetFrameworksError, GetFrameworksUseCase,
            UpdateFrameworkCommand, UpdateFrameworkError, UpdateFrameworkUseCase,
        },
    },
    project::application::{
        domain::entities::{Project, ProjectCard, ProjectDetail},
        ports::{
            incoming::use_cases::{
                CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
                DeleteProjectError, DeleteProjectUseCase, GetProjectByIdError,
                GetProjectByIdUseCase, GetProjectDetailError, GetProjectDetailUseCase,
                GetProjectsError, GetProjectsUseCase, UpdateProjectCommand, UpdateProjectError,
                UpdateProjectUseCase,
            },
            outgoing::ProjectListFilter,
        },
    },
    sitemap::application::ports::incoming::use_cases::{BuildSitemapError, BuildSitemapUseCase},
    skill::application::{
        domain::entities::{Skill, TechSkill},
        ports::incoming::use_cases::{
            CreateSkillCommand, CreateSkillError, CreateSkillUseCase, DeleteSkillError,
            DeleteSkillUseCase, GetSkillsError, GetSkillsUseCase, GetTechSkillsError,
            GetTechSkillsUseCase, UpdateSkillCommand, UpdateSkillError, UpdateSkillUseCase,
        },
    },
};
use crate::shared::pagination::{PageRequest, PageResult};

const NOT_USED: &str = "not used in this test";

// category

#[derive(Default, Clone)]
pub struct StubGetCategoriesUseCase;

#[async_trait]
impl GetCategoriesUseCase for StubGetCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetCategoryNamesUseCase;

#[async_trait]
impl GetCategoryNamesUseCase for StubGetCategoryNamesUseCase {
    async fn execute(&self) -> Result<Vec<String>, GetCategoryNamesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCategoryUseCase;

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(
        &self,
        _command: CreateCategoryCommand,
    ) -> Result<Category, CreateCategoryError> {
        Err(CreateCategoryError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCategoryUseCase;

#[async_trait]
impl UpdateCategoryUseCase for StubUpdateCategoryUseCase {
    async fn execute(
        &self,
        _command: UpdateCategoryCommand,
    ) -> Result<Category, UpdateCategoryError> {
        Err(UpdateCategoryError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCategoryUseCase;

#[async_trait]
impl DeleteCategoryUseCase for StubDeleteCategoryUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteCategoryError> {
        Err(DeleteCategoryError::NotFound)
    }
}

// framework

#[derive(Default, Clone)]
pub struct StubGetFrameworksUseCase;

#[async_trait]
impl GetFrameworksUseCase for StubGetFrameworksUseCase {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Framework>, GetFrameworksError> {
        Ok(PageResult::new(vec![], page, 0))
    }
}

#[derive(Default, Clone)]
pub struct StubGetFrameworkOptionsUseCase;

#[async_trait]
impl GetFrameworkOptionsUseCase for StubGetFrameworkOptionsUseCase {
    async fn execute(&self) -> Result<Vec<FrameworkOption>, GetFrameworkOptionsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubCreateFrameworkUseCase;

#[async_trait]
impl CreateFrameworkUseCase for StubCreateFrameworkUseCase {
    async fn execute(
        &self,
        _command: CreateFrameworkCommand,
    ) -> Result<Framework, CreateFrameworkError> {
        Err(CreateFrameworkError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateFrameworkUseCase;

#[async_trait]
impl UpdateFrameworkUseCase for StubUpdateFrameworkUseCase {
    async fn execute(
        &self,
        _command: UpdateFrameworkCommand,
    ) -> Result<Framework, UpdateFrameworkError> {
        Err(UpdateFrameworkError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteFrameworkUseCase;

#[async_trait]
impl DeleteFrameworkUseCase for StubDeleteFrameworkUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteFrameworkError> {
        Err(DeleteFrameworkError::NotFound)
    }
}

// project

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCard>, GetProjectsError> {
        Ok(PageResult::new(vec![], page, 0))
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectByIdUseCase;

#[async_trait]
impl GetProjectByIdUseCase for StubGetProjectByIdUseCase {
    async fn execute(&self, _id: Uuid) -> Result<Project, GetProjectByIdError> {
        Err(GetProjectByIdError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectDetailUseCase;

#[async_trait]
impl GetProjectDetailUseCase for StubGetProjectDetailUseCase {
    async fn execute(&self, _slug: &str) -> Result<ProjectDetail, GetProjectDetailError> {
        Err(GetProjectDetailError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(&self, _command: UpdateProjectCommand) -> Result<Project, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

// achievement

#[derive(Default, Clone)]
pub struct StubGetAchievementsUseCase;

#[async_trait]
impl GetAchievementsUseCase for StubGetAchievementsUseCase {
    async fn execute(
        &self,
        _group: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Achievement>, GetAchievementsError> {
        Ok(PageResult::new(vec![], page, 0))
    }
}

#[derive(Default, Clone)]
pub struct StubGetAchievementGroupsUseCase;

#[async_trait]
impl GetAchievementGroupsUseCase for StubGetAchievementGroupsUseCase {
    async fn execute(&self) -> Result<Vec<String>, GetAchievementGroupsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubCreateAchievementUseCase;

#[async_trait]
impl CreateAchievementUseCase for StubCreateAchievementUseCase {
    async fn execute(
        &self,
        _command: CreateAchievementCommand,
    ) -> Result<Achievement, CreateAchievementError> {
        Err(CreateAchievementError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateAchievementUseCase;

#[async_trait]
impl UpdateAchievementUseCase for StubUpdateAchievementUseCase {
    async fn execute(
        &self,
        _command: UpdateAchievementCommand,
    ) -> Result<Achievement, UpdateAchievementError> {
        Err(UpdateAchievementError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAchievementUseCase;

#[async_trait]
impl DeleteAchievementUseCase for StubDeleteAchievementUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteAchievementError> {
        Err(DeleteAchievementError::NotFound)
    }
}

// contact

#[derive(Default, Clone)]
pub struct StubGetContactsUseCase;

#[async_trait]
impl GetContactsUseCase for StubGetContactsUseCase {
    async fn execute(
        &self,
        _status: Option<ContactStatus>,
    ) -> Result<Vec<Contact>, GetContactsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _command: SubmitContactCommand) -> Result<Contact, SubmitContactError> {
        Err(SubmitContactError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateContactStatusUseCase;

#[async_trait]
impl UpdateContactStatusUseCase for StubUpdateContactStatusUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _status: ContactStatus,
    ) -> Result<Contact, UpdateContactStatusError> {
        Err(UpdateContactStatusError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteContactUseCase;

#[async_trait]
impl DeleteContactUseCase for StubDeleteContactUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteContactError> {
        Err(DeleteContactError::NotFound)
    }
}

// skill

#[derive(Default, Clone)]
pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Skill>, GetSkillsError> {
        Ok(PageResult::new(vec![], page, 0))
    }
}

#[derive(Default, Clone)]
pub struct StubGetTechSkillsUseCase;

#[async_trait]
impl GetTechSkillsUseCase for StubGetTechSkillsUseCase {
    async fn execute(&self) -> Result<Vec<TechSkill>, GetTechSkillsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubCreateSkillUseCase;

#[async_trait]
impl CreateSkillUseCase for StubCreateSkillUseCase {
    async fn execute(&self, _command: CreateSkillCommand) -> Result<Skill, CreateSkillError> {
        Err(CreateSkillError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateSkillUseCase;

#[async_trait]
impl UpdateSkillUseCase for StubUpdateSkillUseCase {
    async fn execute(&self, _command: UpdateSkillCommand) -> Result<Skill, UpdateSkillError> {
        Err(UpdateSkillError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteSkillUseCase;

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkillUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteSkillError> {
        Err(DeleteSkillError::NotFound)
    }
}

// sitemap

#[derive(Default, Clone)]
pub struct StubBuildSitemapUseCase;

#[async_trait]
impl BuildSitemapUseCase for StubBuildSitemapUseCase {
    async fn execute(&self, _base_url: &str) -> Result<String, BuildSitemapError> {
        Err(BuildSitemapError::QueryError(NOT_USED.to_string()))
    }
}
