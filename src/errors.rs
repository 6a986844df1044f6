use derive_more::Display;
use validator::ValidationErrors;

use crate::repositories::http_repo::Operation;

/// Failure of a skill operation, as seen by the caller.
///
/// Transport problems carry no status; anything the store answered with a
/// non-success status carries the status and whatever body text came back.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum AppError {
    #[display("Transport failure: {_0}")]
    TransportFailure(String),

    #[display("Store error ({status}): {body}")]
    StoreError { status: u16, body: String },

    #[display("Not found ({status}): {body}")]
    NotFound { status: u16, body: String },

    #[display("Validation error ({status}): {body}")]
    ValidationError { status: u16, body: String },

    #[display("Invalid response ({status}): {message}")]
    InvalidResponse { status: u16, message: String },

    #[display("Invalid input: {_0}")]
    InvalidInput(String),
}

impl std::error::Error for AppError {}

impl AppError {
    /// Classifies a non-success status for the given operation.
    pub fn from_status(operation: Operation, status: u16, body: String) -> Self {
        match status {
            404 if operation.targets_single_resource() => AppError::NotFound { status, body },
            400 | 422 if operation.carries_payload() => AppError::ValidationError { status, body },
            _ => AppError::StoreError { status, body },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::StoreError { status, .. }
            | AppError::NotFound { status, .. }
            | AppError::ValidationError { status, .. }
            | AppError::InvalidResponse { status, .. } => Some(*status),
            AppError::TransportFailure(_) | AppError::InvalidInput(_) => None,
        }
    }

    /// Response body text for store-side rejections.
    pub fn body(&self) -> Option<&str> {
        match self {
            AppError::StoreError { body, .. }
            | AppError::NotFound { body, .. }
            | AppError::ValidationError { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, AppError::TransportFailure(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::TransportFailure(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        AppError::InvalidInput(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_only_for_single_resource_operations() {
        assert!(AppError::from_status(Operation::GetById, 404, String::new()).is_not_found());
        assert!(AppError::from_status(Operation::Update, 404, String::new()).is_not_found());
        assert!(AppError::from_status(Operation::Delete, 404, String::new()).is_not_found());
        assert_eq!(
            AppError::from_status(Operation::List, 404, "gone".into()),
            AppError::StoreError { status: 404, body: "gone".into() }
        );
    }

    #[test]
    fn rejected_payloads_are_validation_errors() {
        assert!(matches!(
            AppError::from_status(Operation::Create, 400, "name".into()),
            AppError::ValidationError { status: 400, .. }
        ));
        assert!(matches!(
            AppError::from_status(Operation::Update, 422, String::new()),
            AppError::ValidationError { status: 422, .. }
        ));
        assert!(matches!(
            AppError::from_status(Operation::GetById, 400, String::new()),
            AppError::StoreError { status: 400, .. }
        ));
    }

    #[test]
    fn server_errors_keep_status_and_body() {
        let err = AppError::from_status(Operation::List, 503, "maintenance".into());

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.body(), Some("maintenance"));
        assert_eq!(err.to_string(), "Store error (503): maintenance");
    }

    #[test]
    fn transport_failures_have_no_status() {
        let err = AppError::TransportFailure("connection refused".into());

        assert!(err.is_transport_failure());
        assert_eq!(err.status(), None);
    }
}
