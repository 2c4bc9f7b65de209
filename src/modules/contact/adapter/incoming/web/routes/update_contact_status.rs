use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::contact::application::{
        domain::entities::{Contact, ContactStatus},
        ports::incoming::use_cases::UpdateContactStatusError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContactStatusRequest {
    #[serde(default)]
    pub status: Option<ContactStatus>,
}

#[utoipa::path(
    patch,
    path = "/api/contact/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Contact message id")),
    request_body = UpdateContactStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = inline(SuccessResponse<Contact>)),
        (status = 400, description = "Status missing or unknown", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[patch("/api/contact/{id}")]
pub async fn update_contact_status_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateContactStatusRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let Some(status) = payload.status else {
        return ApiResponse::bad_request("STATUS_REQUIRED", "Status is required");
    };

    match data.contact.update_status.execute(id, status).await {
        Ok(contact) => ApiResponse::success(contact),
        Err(UpdateContactStatusError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }
        Err(err @ UpdateContactStatusError::InvalidTransition { .. }) => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &err.to_string())
        }
        Err(UpdateContactStatusError::RepositoryError(msg)) => {
            error!("Failed to update contact {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
