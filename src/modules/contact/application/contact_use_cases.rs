use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactUseCase, GetContactsUseCase, SubmitContactUseCase, UpdateContactStatusUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub get_list: Arc<dyn GetContactsUseCase + Send + Sync>,
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateContactStatusUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactUseCase + Send + Sync>,
}
