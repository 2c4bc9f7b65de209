use async_trait::async_trait;

use crate::modules::project::application::{
    domain::entities::{
        Project, ProjectDetail, RelatedProject, RELATED_FALLBACK_LIMIT,
        RELATED_SAME_CATEGORY_LIMIT,
    },
    ports::{
        incoming::use_cases::{GetProjectDetailError, GetProjectDetailUseCase},
        outgoing::{ProjectQuery, ProjectQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct GetProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn related_to(&self, project: &Project) -> Result<Vec<Project>, ProjectQueryError> {
        let same_category = self
            .query
            .related_in_category(&project.category, project.id, RELATED_SAME_CATEGORY_LIMIT)
            .await?;

        if !same_category.is_empty() {
            return Ok(same_category);
        }

        self.query
            .latest_except(project.id, RELATED_FALLBACK_LIMIT)
            .await
    }
}

fn to_related(p: Project) -> RelatedProject {
    RelatedProject {
        id: p.id,
        title: p.title,
        slug: p.slug,
        description: p.description,
        thumbnail: p.thumbnail,
        category: p.category,
        preview_link: p.preview_link,
    }
}

#[async_trait]
impl<Q> GetProjectDetailUseCase for GetProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ProjectDetail, GetProjectDetailError> {
        let slug = slug.trim().to_lowercase();

        let project = self.query.get_by_slug(&slug).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetProjectDetailError::NotFound,
            other => GetProjectDetailError::QueryError(other.to_string()),
        })?;

        let related = self
            .related_to(&project)
            .await
            .map_err(|e| GetProjectDetailError::QueryError(e.to_string()))?;

        Ok(ProjectDetail {
            project,
            related_projects: related.into_iter().map(to_related).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::service::test_doubles::{project, InMemoryProjects};

    #[tokio::test]
    async fn related_prefers_same_category_up_to_four() {
        let service = GetProjectDetailService::new(InMemoryProjects::with(vec![
            project("Main", "main", "Web", 0),
            project("W1", "w1", "Web", 1),
            project("W2", "w2", "Web", 2),
            project("W3", "w3", "Web", 3),
            project("W4", "w4", "Web", 4),
            project("W5", "w5", "Web", 5),
            project("M1", "m1", "Mobile", 6),
        ]));

        let detail = service.execute("main").await.unwrap();

        let slugs: Vec<_> = detail
            .related_projects
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(detail.project.slug, "main");
        assert_eq!(slugs, vec!["w1", "w2", "w3", "w4"]);
    }

    #[tokio::test]
    async fn related_falls_back_to_three_latest() {
        let service = GetProjectDetailService::new(InMemoryProjects::with(vec![
            project("Lonely", "lonely", "Research", 0),
            project("A", "a", "Web", 1),
            project("B", "b", "Mobile", 2),
            project("C", "c", "Web", 3),
            project("D", "d", "Desktop", 4),
        ]));

        let detail = service.execute("lonely").await.unwrap();

        let slugs: Vec<_> = detail
            .related_projects
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn slug_lookup_is_normalized() {
        let service =
            GetProjectDetailService::new(InMemoryProjects::with(vec![project("X", "x", "Web", 0)]));

        let detail = service.execute("  X ").await.unwrap();

        assert!(detail.related_projects.is_empty());
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let service = GetProjectDetailService::new(InMemoryProjects::default());

        let result = service.execute("missing").await;

        assert!(matches!(result, Err(GetProjectDetailError::NotFound)));
    }
}
