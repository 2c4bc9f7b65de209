mod create_category_use_case;
mod delete_category_use_case;
mod get_categories_use_case;
mod get_category_names_use_case;
mod update_category_use_case;

pub use create_category_use_case::{
    CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase,
};
pub use delete_category_use_case::{DeleteCategoryError, DeleteCategoryUseCase};
pub use get_categories_use_case::{GetCategoriesError, GetCategoriesUseCase};
pub use get_category_names_use_case::{GetCategoryNamesError, GetCategoryNamesUseCase};
pub use update_category_use_case::{
    UpdateCategoryCommand, UpdateCategoryError, UpdateCategoryUseCase,
};
