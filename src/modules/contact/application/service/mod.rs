mod delete_contact_service;
mod get_contacts_service;
mod submit_contact_service;
mod update_contact_status_service;

pub use delete_contact_service::DeleteContactService;
pub use get_contacts_service::GetContactsService;
pub use submit_contact_service::SubmitContactService;
pub use update_contact_status_service::UpdateContactStatusService;
