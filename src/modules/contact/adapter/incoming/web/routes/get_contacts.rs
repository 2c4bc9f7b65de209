use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::contact::application::domain::entities::{Contact, ContactStatus},
    shared::api::{ApiResponse, ApiSecretGuard},
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ContactListQuery {
    pub status: Option<ContactStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactList {
    pub contacts: Vec<Contact>,
}

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    params(ContactListQuery),
    security(("ApiSecret" = [])),
    responses(
        (status = 200, description = "Messages, newest first", body = inline(SuccessResponse<ContactList>)),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API secret", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/contact")]
pub async fn get_contacts_handler(
    _guard: ApiSecretGuard,
    data: web::Data<AppState>,
    query: web::Query<ContactListQuery>,
) -> impl Responder {
    match data.contact.get_list.execute(query.status).await {
        Ok(contacts) => ApiResponse::success(ContactList { contacts }),
        Err(e) => {
            error!("Failed to fetch contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::{
        modules::contact::application::ports::incoming::use_cases::{
            GetContactsError, GetContactsUseCase,
        },
        shared::api::custom_query_config,
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{api_secret_data, bearer},
            fixtures::sample_contact,
        },
    };

    #[derive(Default)]
    struct MockGetContactsUseCase {
        received: Arc<Mutex<Option<Option<ContactStatus>>>>,
    }

    #[async_trait]
    impl GetContactsUseCase for MockGetContactsUseCase {
        async fn execute(
            &self,
            status: Option<ContactStatus>,
        ) -> Result<Vec<Contact>, GetContactsError> {
            *self.received.lock().unwrap() = Some(status);
            Ok(vec![sample_contact()])
        }
    }

    #[actix_web::test]
    async fn wraps_messages_in_contacts_key() {
        let mock = MockGetContactsUseCase::default();
        let received = mock.received.clone();
        let state = TestAppStateBuilder::default().with_get_contacts(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(api_secret_data())
                .service(get_contacts_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/contact?status=replied")
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["contacts"][0]["name"], "Jane Doe");
        assert_eq!(
            *received.lock().unwrap(),
            Some(Some(ContactStatus::Replied))
        );
    }

    #[actix_web::test]
    async fn unknown_status_is_bad_request() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(api_secret_data())
                .app_data(custom_query_config())
                .service(get_contacts_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/contact?status=archived")
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
