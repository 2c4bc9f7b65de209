mod delete_contact_use_case;
mod get_contacts_use_case;
mod submit_contact_use_case;
mod update_contact_status_use_case;

pub use delete_contact_use_case::{DeleteContactError, DeleteContactUseCase};
pub use get_contacts_use_case::{GetContactsError, GetContactsUseCase};
pub use submit_contact_use_case::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase};
pub use update_contact_status_use_case::{UpdateContactStatusError, UpdateContactStatusUseCase};
