use serde::Serialize;
use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod categories;
pub mod products;
pub mod tags;

/// Result type returned by catalog service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No row matched the requested id.
    #[error("not found")]
    NotFound,
    /// The payload was rejected, either by validation or by a store constraint.
    #[error("{0}")]
    Validation(String),
    /// Any other store failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Validation(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

/// `{"message": ...}` body used for acknowledgments and error responses.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_service_errors() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::ConstraintViolation("fk".into())),
            ServiceError::Validation(message) if message == "fk"
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::InvalidData("bad".into())),
            ServiceError::Internal(_)
        ));
    }
}
