use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Unread,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Unread => "unread",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }

    /// A replied message can be re-read but never goes back to unread.
    pub fn can_transition_to(&self, next: ContactStatus) -> bool {
        !matches!((self, next), (ContactStatus::Replied, ContactStatus::Unread))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must not exceed 100 characters")]
    NameTooLong,

    #[error("Email is required")]
    EmailRequired,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Subject is required")]
    SubjectRequired,

    #[error("Subject must not exceed 200 characters")]
    SubjectTooLong,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must not exceed 5000 characters")]
    MessageTooLong,
}

fn bounded(
    raw: &str,
    max: usize,
    required: ContactValidationError,
    too_long: ContactValidationError,
) -> Result<String, ContactValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(required);
    }
    if value.chars().count() > max {
        return Err(too_long);
    }
    Ok(value.to_string())
}

pub fn normalize_name(raw: &str) -> Result<String, ContactValidationError> {
    bounded(
        raw,
        MAX_NAME_LEN,
        ContactValidationError::NameRequired,
        ContactValidationError::NameTooLong,
    )
}

pub fn normalize_subject(raw: &str) -> Result<String, ContactValidationError> {
    bounded(
        raw,
        MAX_SUBJECT_LEN,
        ContactValidationError::SubjectRequired,
        ContactValidationError::SubjectTooLong,
    )
}

pub fn normalize_message(raw: &str) -> Result<String, ContactValidationError> {
    bounded(
        raw,
        MAX_MESSAGE_LEN,
        ContactValidationError::MessageRequired,
        ContactValidationError::MessageTooLong,
    )
}

pub fn normalize_email(raw: &str) -> Result<String, ContactValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ContactValidationError::EmailRequired);
    }
    if !EmailAddress::is_valid(email) {
        return Err(ContactValidationError::InvalidEmail);
    }
    Ok(email.to_string())
}
