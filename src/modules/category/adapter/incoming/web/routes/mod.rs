mod create_category;
mod delete_category;
mod get_categories;
mod get_category_names;
mod update_category;

pub use create_category::*;
pub use delete_category::*;
pub use get_categories::*;
pub use get_category_names::*;
pub use update_category::*;
