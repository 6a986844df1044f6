use actix_web::{error::JsonPayloadError, web};

use crate::api_errors::ApiError;

/// Malformed or non-JSON bodies become 400s with a JSON error body.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::from(err).into()
    }));
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        ApiError::BadRequest(format!("JSON payload error: {}", err))
    }
}
