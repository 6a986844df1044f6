use derive_more::Display;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Errors returned by the development store's HTTP handlers.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("Not found: {}", _0)]
    NotFound(String),

    #[display("Validation error: {}", _0)]
    ValidationError(String),

    #[display("Bad request: {}", _0)]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound(_) => HttpResponse::NotFound().json(json!({
                "error": "not_found",
                "message": self.to_string()
            })),
            ApiError::ValidationError(_) => HttpResponse::BadRequest().json(json!({
                "error": "validation_error",
                "message": self.to_string()
            })),
            ApiError::BadRequest(_) => HttpResponse::BadRequest().json(json!({
                "error": "bad_request",
                "message": self.to_string()
            })),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}
