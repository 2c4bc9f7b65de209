mod create_skill_use_case;
mod delete_skill_use_case;
mod get_skills_use_case;
mod get_tech_skills_use_case;
mod update_skill_use_case;

pub use create_skill_use_case::{CreateSkillCommand, CreateSkillError, CreateSkillUseCase};
pub use delete_skill_use_case::{DeleteSkillError, DeleteSkillUseCase};
pub use get_skills_use_case::{GetSkillsError, GetSkillsUseCase};
pub use get_tech_skills_use_case::{GetTechSkillsError, GetTechSkillsUseCase};
pub use update_skill_use_case::{UpdateSkillCommand, UpdateSkillError, UpdateSkillUseCase};
