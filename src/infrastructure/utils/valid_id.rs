use crate::{entities::skill::SkillId, errors::AppError};

/// Parses a skill id from its string form
pub fn valid_skill_id(id: &str) -> Result<SkillId, AppError> {
    id.parse::<SkillId>()
        .map_err(|_| AppError::InvalidInput(format!("Invalid skill ID: '{}'", id)))
}
