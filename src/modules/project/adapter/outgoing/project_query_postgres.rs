use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    modules::project::application::{
        domain::entities::{Project, ProjectCard},
        ports::outgoing::{ProjectListFilter, ProjectQuery, ProjectQueryError},
    },
    shared::pagination::{PageRequest, PageResult},
};

use super::sea_orm_entity::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectCard>, ProjectQueryError> {
        let mut query = Entity::find();

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category));
        }

        if let Some(search) = filter.search {
            let pattern = LikeExpr::new(like_pattern(&search)).escape('\\');
            query = query.filter(Expr::col(Column::Title).ilike(pattern));
        }

        let query = query.order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = models
            .iter()
            .map(|m| to_domain(m).map(ProjectCard::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Project, ProjectQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        to_domain(&model)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        to_domain(&model)
    }

    async fn related_in_category(
        &self,
        category: &str,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        let models = Entity::find()
            .filter(Column::Category.eq(category))
            .filter(Column::Id.ne(exclude_id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.iter().map(to_domain).collect()
    }

    async fn latest_except(
        &self,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        let models = Entity::find()
            .filter(Column::Id.ne(exclude_id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.iter().map(to_domain).collect()
    }

    async fn slug_taken(
        &self,
        slug: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, ProjectQueryError> {
        let mut query = Entity::find().filter(Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        let count = query.count(&*self.db).await.map_err(map_db_err)?;

        Ok(count > 0)
    }
}

/// Wraps the trimmed term in `%...%` with its own wildcards escaped.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_domain(model: &Model) -> Result<Project, ProjectQueryError> {
    model
        .to_domain()
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}
