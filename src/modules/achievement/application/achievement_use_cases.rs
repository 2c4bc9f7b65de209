use std::sync::Arc;

use crate::modules::achievement::application::ports::incoming::use_cases::{
    CreateAchievementUseCase, DeleteAchievementUseCase, GetAchievementGroupsUseCase,
    GetAchievementsUseCase, UpdateAchievementUseCase,
};

#[derive(Clone)]
pub struct AchievementUseCases {
    pub get_list: Arc<dyn GetAchievementsUseCase + Send + Sync>,
    pub get_groups: Arc<dyn GetAchievementGroupsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateAchievementUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAchievementUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAchievementUseCase + Send + Sync>,
}
