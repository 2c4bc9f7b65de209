use std::sync::Arc;

use crate::modules::framework::application::ports::incoming::use_cases::{
    CreateFrameworkUseCase, DeleteFrameworkUseCase, GetFrameworkOptionsUseCase,
    GetFrameworksUseCase, UpdateFrameworkUseCase,
};

#[derive(Clone)]
pub struct FrameworkUseCases {
    pub get_list: Arc<dyn GetFrameworksUseCase + Send + Sync>,
    pub get_options: Arc<dyn GetFrameworkOptionsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateFrameworkUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateFrameworkUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteFrameworkUseCase + Send + Sync>,
}
