mod create_achievement_service;
mod delete_achievement_service;
mod get_achievement_groups_service;
mod get_achievements_service;
mod update_achievement_service;

pub use create_achievement_service::CreateAchievementService;
pub use delete_achievement_service::DeleteAchievementService;
pub use get_achievement_groups_service::GetAchievementGroupsService;
pub use get_achievements_service::GetAchievementsService;
pub use update_achievement_service::UpdateAchievementService;
