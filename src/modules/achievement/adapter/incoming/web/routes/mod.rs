mod create_achievement;
mod delete_achievement;
mod get_achievement_groups;
mod get_achievements;
mod update_achievement;

pub use create_achievement::*;
pub use delete_achievement::*;
pub use get_achievement_groups::*;
pub use get_achievements::*;
pub use update_achievement::*;
