use std::sync::Arc;

use crate::modules::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase, GetCategoryNamesUseCase,
    UpdateCategoryUseCase,
};

#[derive(Clone)]
pub struct CategoryUseCases {
    pub get_list: Arc<dyn GetCategoriesUseCase + Send + Sync>,
    pub get_names: Arc<dyn GetCategoryNamesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
}
