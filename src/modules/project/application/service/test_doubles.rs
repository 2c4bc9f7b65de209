//! In-memory project store shared by the service tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::{
    modules::project::application::{
        domain::entities::{Project, ProjectCard},
        ports::outgoing::{
            CreateProjectData, PatchProjectData, ProjectListFilter, ProjectQuery,
            ProjectQueryError, ProjectRepository, ProjectRepositoryError,
        },
    },
    shared::{
        pagination::{paginate, PageRequest, PageResult},
        patch::PatchField,
    },
};

/// `age` orders projects: a larger value is older.
pub fn project(title: &str, slug: &str, category: &str, age: i64) -> Project {
    let created = Utc::now() - Duration::minutes(age);
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        slug: slug.to_string(),
        description: format!("{title} description"),
        content: format!("<p>{title}</p>"),
        category: category.to_string(),
        thumbnail: format!("https://cdn/{slug}.png"),
        image_urls: vec![],
        preview_link: None,
        frameworks: vec![],
        created_at: created,
        updated_at: created,
    }
}

/// Clones share the same backing list.
#[derive(Clone, Default)]
pub struct InMemoryProjects {
    pub projects: Arc<Mutex<Vec<Project>>>,
    pub fail: bool,
}

impl InMemoryProjects {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(Mutex::new(projects)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn newest_first(&self) -> Vec<Project> {
        let mut all = self.projects.lock().unwrap().clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    fn check(&self) -> Result<(), ProjectQueryError> {
        if self.fail {
            return Err(ProjectQueryError::DatabaseError("down".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjects {
    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCard>, ProjectQueryError> {
        self.check()?;
        let matching: Vec<ProjectCard> = self
            .newest_first()
            .into_iter()
            .filter(|p| filter.category.as_ref().is_none_or(|c| &p.category == c))
            .filter(|p| {
                filter
                    .search
                    .as_ref()
                    .is_none_or(|s| p.title.to_lowercase().contains(&s.to_lowercase()))
            })
            .map(ProjectCard::from)
            .collect();
        Ok(paginate(matching, page))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Project, ProjectQueryError> {
        self.check()?;
        self.newest_first()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError> {
        self.check()?;
        self.newest_first()
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn related_in_category(
        &self,
        category: &str,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        self.check()?;
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|p| p.category == category && p.id != exclude_id)
            .take(limit as usize)
            .collect())
    }

    async fn latest_except(
        &self,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        self.check()?;
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|p| p.id != exclude_id)
            .take(limit as usize)
            .collect())
    }

    async fn slug_taken(
        &self,
        slug: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, ProjectQueryError> {
        self.check()?;
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.slug == slug && Some(p.id) != exclude_id))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        if self.fail {
            return Err(ProjectRepositoryError::DatabaseError("down".into()));
        }
        let now = Utc::now();
        let created = Project {
            id: Uuid::new_v4(),
            title: data.title,
            slug: data.slug,
            description: data.description,
            content: data.content,
            category: data.category,
            thumbnail: data.thumbnail,
            image_urls: data.image_urls,
            preview_link: data.preview_link,
            frameworks: data.frameworks,
            created_at: now,
            updated_at: now,
        };
        self.projects.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        if self.fail {
            return Err(ProjectRepositoryError::DatabaseError("down".into()));
        }
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let Some(title) = data.title {
            project.title = title;
        }
        if let Some(slug) = data.slug {
            project.slug = slug;
        }
        if let Some(category) = data.category {
            project.category = category;
        }
        match data.preview_link {
            PatchField::Unset => {}
            PatchField::Null => project.preview_link = None,
            PatchField::Value(link) => project.preview_link = Some(link),
        }
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        if self.fail {
            return Err(ProjectRepositoryError::DatabaseError("down".into()));
        }
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}
