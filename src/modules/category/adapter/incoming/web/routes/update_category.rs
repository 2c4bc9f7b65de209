use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_category::map_name_error;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::category::application::{
        domain::entities::Category,
        ports::incoming::use_cases::{UpdateCategoryCommand, UpdateCategoryError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[schema(example = "Mobile")]
    #[serde(default)]
    pub name: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/categories",
    tag = "categories",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category renamed", body = inline(SuccessResponse<Category>)),
        (status = 400, description = "Id or name missing", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/categories")]
pub async fn update_category_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdateCategoryRequest>,
) -> impl Responder {
    let Some(id) = payload.id else {
        return ApiResponse::bad_request("ID_REQUIRED", "ID is required");
    };

    let command = match UpdateCategoryCommand::new(id, payload.name.as_deref().unwrap_or_default())
    {
        Ok(cmd) => cmd,
        Err(err) => return map_name_error(err),
    };

    match data.category.update.execute(command).await {
        Ok(category) => ApiResponse::success(category),
        Err(UpdateCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(UpdateCategoryError::RepositoryError(msg)) => {
            error!("Failed to update category {}: {}", id, msg);
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
        modules::category::application::ports::incoming::use_cases::UpdateCategoryUseCase,
        tests::support::{app_state_builder::TestAppStateBuilder, fixtures::sample_category},
    };

    #[derive(Clone)]
    struct MockUpdateCategoryUseCase {
        result: Result<Category, UpdateCategoryError>,
    }

    #[async_trait]
    impl UpdateCategoryUseCase for MockUpdateCategoryUseCase {
        async fn execute(
            &self,
            _command: UpdateCategoryCommand,
        ) -> Result<Category, UpdateCategoryError> {
            self.result.clone()
        }
    }

    async fn call(
        uc: MockUpdateCategoryUseCase,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_update_category(uc).build();
        let app =
            test::init_service(App::new().app_data(state).service(update_category_handler)).await;

        let req = test::TestRequest::put()
            .uri("/api/categories")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let json: serde_json::Value = test::read_body_json(resp).await;
        (status, json)
    }

    #[actix_web::test]
    async fn update_category_success() {
        let category = sample_category("Mobile");
        let (status, json) = call(
            MockUpdateCategoryUseCase {
                result: Ok(category.clone()),
            },
            serde_json::json!({ "id": category.id, "name": "Mobile" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["name"], "Mobile");
    }

    #[actix_web::test]
    async fn missing_id_returns_bad_request() {
        let (status, json) = call(
            MockUpdateCategoryUseCase {
                result: Err(UpdateCategoryError::NotFound),
            },
            serde_json::json!({ "name": "Mobile" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "ID_REQUIRED");
    }

    #[actix_web::test]
    async fn empty_name_returns_bad_request() {
        let (status, json) = call(
            MockUpdateCategoryUseCase {
                result: Err(UpdateCategoryError::NotFound),
            },
            serde_json::json!({ "id": Uuid::new_v4(), "name": "" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "NAME_REQUIRED");
    }

    #[actix_web::test]
    async fn unknown_id_returns_not_found() {
        let (status, json) = call(
            MockUpdateCategoryUseCase {
                result: Err(UpdateCategoryError::NotFound),
            },
            serde_json::json!({ "id": Uuid::new_v4(), "name": "Mobile" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "CATEGORY_NOT_FOUND");
    }
}
