use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    modules::contact::application::ports::incoming::use_cases::DeleteContactError,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Contact message id")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/contact/{id}")]
pub async fn delete_contact_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contact.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }
        Err(DeleteContactError::RepositoryError(msg)) => {
            error!("Failed to delete contact {}: {}", id, msg);
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
        modules::contact::application::ports::incoming::use_cases::DeleteContactUseCase,
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    struct MockDeleteContactUseCase {
        result: Result<(), DeleteContactError>,
    }

    #[async_trait]
    impl DeleteContactUseCase for MockDeleteContactUseCase {
        async fn execute(&self, _id: Uuid) -> Result<(), DeleteContactError> {
            self.result.clone()
        }
    }

    async fn delete(result: Result<(), DeleteContactError>) -> StatusCode {
        let state = TestAppStateBuilder::default()
            .with_delete_contact(MockDeleteContactUseCase { result })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(delete_contact_handler)).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/contact/{}", Uuid::new_v4()))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn deletes_message() {
        assert_eq!(delete(Ok(())).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn missing_message_is_not_found() {
        assert_eq!(
            delete(Err(DeleteContactError::NotFound)).await,
            StatusCode::NOT_FOUND
        );
    }
}
