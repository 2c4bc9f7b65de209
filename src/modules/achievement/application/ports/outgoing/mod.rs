mod achievement_query;
mod achievement_repository;

pub use achievement_query::{AchievementQuery, AchievementQueryError};
pub use achievement_repository::{
    AchievementRepository, AchievementRepositoryError, NewAchievementData, PatchAchievementData,
};
