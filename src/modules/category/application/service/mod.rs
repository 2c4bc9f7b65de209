mod create_category_service;
mod delete_category_service;
mod get_categories_service;
mod get_category_names_service;
mod update_category_service;

pub use create_category_service::CreateCategoryService;
pub use delete_category_service::DeleteCategoryService;
pub use get_categories_service::GetCategoriesService;
pub use get_category_names_service::GetCategoryNamesService;
pub use update_category_service::UpdateCategoryService;
