use async_trait::async_trait;
use tracing::instrument;

use crate::{
    entities::skill::{Skill, SkillId, SkillPayload},
    errors::AppError,
    repositories::http_repo::{HttpSkillRepo, Operation},
};

/// Data access for skills. Every call is one independent request against
/// the store; nothing is cached or retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn get_skill_by_id(&self, id: SkillId) -> Result<Skill, AppError>;
    async fn create_skill(&self, payload: &SkillPayload) -> Result<Skill, AppError>;
    /// Full replace. `id` addresses the record; the payload never carries one.
    async fn update_skill(&self, id: SkillId, payload: &SkillPayload) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: SkillId) -> Result<(), AppError>;
}

#[async_trait]
impl SkillRepository for HttpSkillRepo {
    #[instrument(skip(self))]
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let url = self.collection_url()?;
        let response = self.send(Operation::List, url, None).await?;
        Self::decode(Operation::List, response).await
    }

    #[instrument(skip(self))]
    async fn get_skill_by_id(&self, id: SkillId) -> Result<Skill, AppError> {
        let url = self.resource_url(id)?;
        let response = self.send(Operation::GetById, url, None).await?;
        Self::decode(Operation::GetById, response).await
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create_skill(&self, payload: &SkillPayload) -> Result<Skill, AppError> {
        let url = self.collection_url()?;
        let response = self.send(Operation::Create, url, Some(payload)).await?;
        Self::decode(Operation::Create, response).await
    }

    #[instrument(skip(self, payload))]
    async fn update_skill(&self, id: SkillId, payload: &SkillPayload) -> Result<Skill, AppError> {
        let url = self.resource_url(id)?;
        let response = self.send(Operation::Update, url, Some(payload)).await?;
        Self::decode(Operation::Update, response).await
    }

    #[instrument(skip(self))]
    async fn delete_skill(&self, id: SkillId) -> Result<(), AppError> {
        let url = self.resource_url(id)?;
        // Drain the body so a reset mid-response still counts as a transport failure.
        self.send(Operation::Delete, url, None).await?.bytes().await?;
        Ok(())
    }
}
