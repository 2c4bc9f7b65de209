use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::contact::application::{
        domain::entities::{Contact, ContactValidationError},
        ports::incoming::use_cases::{SubmitContactCommand, SubmitContactError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn map_validation_error(err: ContactValidationError) -> HttpResponse {
    let code = match err {
        ContactValidationError::NameRequired => "NAME_REQUIRED",
        ContactValidationError::NameTooLong => "NAME_TOO_LONG",
        ContactValidationError::EmailRequired => "EMAIL_REQUIRED",
        ContactValidationError::InvalidEmail => "INVALID_EMAIL",
        ContactValidationError::SubjectRequired => "SUBJECT_REQUIRED",
        ContactValidationError::SubjectTooLong => "SUBJECT_TOO_LONG",
        ContactValidationError::MessageRequired => "MESSAGE_REQUIRED",
        ContactValidationError::MessageTooLong => "MESSAGE_TOO_LONG",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Message received", body = inline(SuccessResponse<Contact>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitContactRequest>,
) -> impl Responder {
    let command = match SubmitContactCommand::new(
        payload.name.as_deref().unwrap_or_default(),
        payload.email.as_deref().unwrap_or_default(),
        payload.subject.as_deref().unwrap_or_default(),
        payload.message.as_deref().unwrap_or_default(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_validation_error(err),
    };

    match data.contact.submit.execute(command).await {
        Ok(contact) => {
            info!("Contact message {} received", contact.id);
            ApiResponse::created(contact)
        }
        Err(SubmitContactError::RepositoryError(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    use crate::{
        modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase,
        tests::support::{app_state_builder::TestAppStateBuilder, fixtures::sample_contact},
    };

    struct MockSubmitContactUseCase;

    #[async_trait]
    impl SubmitContactUseCase for MockSubmitContactUseCase {
        async fn execute(
            &self,
            command: SubmitContactCommand,
        ) -> Result<Contact, SubmitContactError> {
            let mut contact = sample_contact();
            contact.email = command.email().to_string();
            Ok(contact)
        }
    }

    async fn post(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_submit_contact(MockSubmitContactUseCase)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(submit_contact_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn valid_message_is_created_unread() {
        let (status, json) = post(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "I like your work"
        }))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["status"], "unread");
        assert_eq!(json["data"]["email"], "jane@example.com");
    }

    #[actix_web::test]
    async fn invalid_email_is_rejected() {
        let (status, json) = post(json!({
            "name": "Jane",
            "email": "not-an-email",
            "subject": "Hello",
            "message": "Hi"
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INVALID_EMAIL");
    }

    #[actix_web::test]
    async fn missing_message_is_rejected() {
        let (status, json) = post(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "subject": "Hello"
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "MESSAGE_REQUIRED");
    }
}
