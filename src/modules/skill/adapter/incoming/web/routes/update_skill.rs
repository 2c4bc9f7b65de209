use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::create_skill::map_validation_error;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::skill::application::{
        domain::entities::Skill,
        ports::incoming::use_cases::{UpdateSkillCommand, UpdateSkillError},
    },
    shared::api::{ApiResponse, IdQuery},
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSkillRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/skills",
    tag = "skills",
    params(IdQuery),
    request_body = UpdateSkillRequest,
    responses(
        (status = 200, description = "Skill updated", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/skills")]
pub async fn update_skill_handler(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
    payload: web::Json<UpdateSkillRequest>,
) -> impl Responder {
    let Some(id) = query.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    let command = match UpdateSkillCommand::new(
        id,
        payload.title.as_deref(),
        payload.image_url.as_deref(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.skill.update.execute(command).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(UpdateSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(UpdateSkillError::RepositoryError(msg)) => {
            error!("Failed to update skill {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::{
        modules::skill::application::ports::incoming::use_cases::UpdateSkillUseCase,
        tests::support::{app_state_builder::TestAppStateBuilder, fixtures::sample_skill},
    };

    struct MockUpdateSkillUseCase {
        result: Result<Skill, UpdateSkillError>,
    }

    #[async_trait]
    impl UpdateSkillUseCase for MockUpdateSkillUseCase {
        async fn execute(
            &self,
            _command: UpdateSkillCommand,
        ) -> Result<Skill, UpdateSkillError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn update_skill_success() {
        let state = TestAppStateBuilder::default()
            .with_update_skill(MockUpdateSkillUseCase {
                result: Ok(sample_skill("TypeScript")),
            })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(update_skill_handler)).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/skills?id={}", Uuid::new_v4()))
            .set_json(serde_json::json!({ "title": "TypeScript" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn update_without_id_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(update_skill_handler)).await;

        let req = test::TestRequest::put()
            .uri("/api/skills")
            .set_json(serde_json::json!({ "title": "TypeScript" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "ID_REQUIRED");
    }

    #[actix_web::test]
    async fn update_missing_skill_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_update_skill(MockUpdateSkillUseCase {
                result: Err(UpdateSkillError::NotFound),
            })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(update_skill_handler)).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/skills?id={}", Uuid::new_v4()))
            .set_json(serde_json::json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
