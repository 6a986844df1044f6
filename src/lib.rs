mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod api_errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod store_server;
pub mod cli;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{store, utils};

use errors::AppError;
use repositories::http_repo::HttpSkillRepo;
use use_cases::skills::SkillHandler;

pub struct AppState {
    pub skill_handler: AppSkillHandler,
}

pub type AppSkillHandler = SkillHandler<HttpSkillRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Result<Self, AppError> {
        let skill_repo = HttpSkillRepo::from_config(config)?;
        tracing::debug!(base_url = %skill_repo.base_url(), "Skill repository ready");

        Ok(AppState {
            skill_handler: SkillHandler::new(skill_repo),
        })
    }
}
