use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::project::application::{
        domain::entities::ProjectDetail, ports::incoming::use_cases::GetProjectDetailError,
    },
    shared::api::{ApiResponse, ApiSecretGuard},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug")),
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "Project with related projects", body = inline(SuccessResponse<ProjectDetail>)),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_project_detail_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get_detail.execute(&slug).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetProjectDetailError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetProjectDetailError::QueryError(msg)) => {
            error!("Failed to fetch project '{}': {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        modules::project::application::{
            domain::entities::RelatedProject,
            ports::incoming::use_cases::GetProjectDetailUseCase,
        },
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{api_secret_data, bearer},
            fixtures::sample_project,
        },
    };

    struct MockGetProjectDetailUseCase;

    #[async_trait]
    impl GetProjectDetailUseCase for MockGetProjectDetailUseCase {
        async fn execute(&self, slug: &str) -> Result<ProjectDetail, GetProjectDetailError> {
            if slug != "shop" {
                return Err(GetProjectDetailError::NotFound);
            }
            let related = sample_project("blog");
            Ok(ProjectDetail {
                project: sample_project("shop"),
                related_projects: vec![RelatedProject {
                    id: related.id,
                    title: related.title,
                    slug: related.slug,
                    description: related.description,
                    thumbnail: related.thumbnail,
                    category: related.category,
                    preview_link: related.preview_link,
                }],
            })
        }
    }

    #[actix_web::test]
    async fn returns_project_with_related() {
        let state = TestAppStateBuilder::default()
            .with_get_project_detail(MockGetProjectDetailUseCase)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(api_secret_data())
                .service(get_project_detail_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/shop")
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["slug"], "shop");
        assert_eq!(json["data"]["related_projects"][0]["slug"], "blog");
    }

    #[actix_web::test]
    async fn unknown_slug_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_get_project_detail(MockGetProjectDetailUseCase)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(api_secret_data())
                .service(get_project_detail_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/nope")
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
