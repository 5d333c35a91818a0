use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the store layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the requested id.
    #[error("record not found")]
    NotFound,
    /// The store rejected a write because of a referential or column constraint.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// A stored value could not be converted into its domain type.
    #[error("invalid stored data: {0}")]
    InvalidData(String),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Database(DieselError),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                kind @ (DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::CheckViolation),
                info,
            ) => {
                log::debug!("Store rejected write ({kind:?}): {}", info.message());
                RepositoryError::ConstraintViolation(info.message().to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}

impl From<rust_decimal::Error> for RepositoryError {
    fn from(err: rust_decimal::Error) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}
