use actix_web::{web, HttpResponse, Responder};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    api_errors::ApiError,
    entities::skill::{SkillId, SkillPayload},
    store::InMemorySkillStore,
};

#[instrument(skip(store))]
pub async fn list_skills(store: web::Data<InMemorySkillStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list())
}

#[instrument(skip(store))]
pub async fn get_skill_by_id(
    skill_id: web::Path<SkillId>,
    store: web::Data<InMemorySkillStore>,
) -> Result<impl Responder, ApiError> {
    let skill_id = skill_id.into_inner();
    let skill = store
        .get(skill_id)
        .ok_or_else(|| ApiError::NotFound(format!("Skill {} not found", skill_id)))?;

    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(store, data))]
pub async fn create_skill(
    store: web::Data<InMemorySkillStore>,
    data: web::Json<SkillPayload>,
) -> Result<impl Responder, ApiError> {
    let payload = data.into_inner();
    payload.validate()?;

    let skill = store.insert(payload);
    info!(id = %skill.id, "Stored new skill");

    Ok(HttpResponse::Created().json(skill))
}

/// Full replace; an `id` in the body is ignored in favour of the path.
#[instrument(skip(store, data))]
pub async fn update_skill(
    skill_id: web::Path<SkillId>,
    store: web::Data<InMemorySkillStore>,
    data: web::Json<SkillPayload>,
) -> Result<impl Responder, ApiError> {
    let skill_id = skill_id.into_inner();
    let payload = data.into_inner();
    payload.validate()?;

    let skill = store
        .replace(skill_id, payload)
        .ok_or_else(|| ApiError::NotFound(format!("Skill {} not found", skill_id)))?;

    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(store))]
pub async fn delete_skill(
    skill_id: web::Path<SkillId>,
    store: web::Data<InMemorySkillStore>,
) -> Result<impl Responder, ApiError> {
    let skill_id = skill_id.into_inner();
    if !store.remove(skill_id) {
        return Err(ApiError::NotFound(format!("Skill {} not found", skill_id)));
    }

    Ok(HttpResponse::NoContent().finish())
}
