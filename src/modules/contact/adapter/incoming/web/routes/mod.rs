mod delete_contact;
mod get_contacts;
mod submit_contact;
mod update_contact_status;

pub use delete_contact::*;
pub use get_contacts::*;
pub use submit_contact::*;
pub use update_contact_status::*;
