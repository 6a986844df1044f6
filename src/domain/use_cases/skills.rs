use tracing::info;
use validator::Validate;

use crate::{
    entities::{
        skill::{Skill, SkillPayload},
        skill_form::{SkillEdit, SkillForm},
        summary::SkillSummary,
    },
    errors::AppError,
    repositories::skill::SkillRepository,
    utils::valid_id::valid_skill_id,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    /// Retrieves every skill in store order
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    /// Retrieves a skill by its ID
    pub async fn get_skill(&self, skill_id: &str) -> Result<Skill, AppError> {
        let valid_id = valid_skill_id(skill_id)?;
        self.skill_repo.get_skill_by_id(valid_id).await
    }

    /// Creates a skill from raw form input. A blank name never reaches the store.
    pub async fn create_skill(&self, form: SkillForm) -> Result<Skill, AppError> {
        let payload = SkillPayload::from(form);
        payload.validate()?;

        let skill = self.skill_repo.create_skill(&payload).await?;
        info!(id = %skill.id, name = %skill.name, "Skill created");

        Ok(skill)
    }

    /// Replaces a skill with the given payload or full record. The path id wins
    /// over any id carried by a record.
    pub async fn update_skill<P>(&self, skill_id: &str, payload: P) -> Result<Skill, AppError>
    where
        P: Into<SkillPayload>,
    {
        let valid_id = valid_skill_id(skill_id)?;
        let payload = payload.into();
        payload.validate()?;

        self.skill_repo.update_skill(valid_id, &payload).await
    }

    /// Fetches the current record, applies the edits and sends the full replacement.
    pub async fn edit_skill(&self, skill_id: &str, edit: SkillEdit) -> Result<Skill, AppError> {
        let valid_id = valid_skill_id(skill_id)?;
        let current = self.skill_repo.get_skill_by_id(valid_id).await?;

        let payload = edit.apply_to(current);
        payload.validate()?;

        self.skill_repo.update_skill(valid_id, &payload).await
    }

    /// Deletes a skill by its ID
    pub async fn delete_skill(&self, skill_id: &str) -> Result<(), AppError> {
        let valid_id = valid_skill_id(skill_id)?;
        self.skill_repo.delete_skill(valid_id).await?;
        info!(id = %valid_id, "Skill deleted");
        Ok(())
    }

    /// Counts skills overall and how many reached their target level
    pub async fn summary(&self) -> Result<SkillSummary, AppError> {
        let skills = self.skill_repo.list_skills().await?;
        Ok(SkillSummary::from_skills(&skills))
    }
}
