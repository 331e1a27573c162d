use thiserror::Error;

use crate::storage::StorageError;

/// Outcome classes every handler maps to an HTTP status
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field is missing or malformed
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// A unique constraint would be violated
    #[error("{0}")]
    Conflict(String),

    /// The payload points at a species or vaccine that does not exist
    #[error("{0}")]
    InvalidReference(String),

    #[error(transparent)]
    Storage(StorageError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UniqueViolation(_) => {
                DomainError::Conflict("El registro ya existe.".to_string())
            }
            StorageError::ForeignKeyViolation(_) => {
                DomainError::InvalidReference("El registro relacionado no existe.".to_string())
            }
            other => DomainError::Storage(other),
        }
    }
}

impl DomainError {
    /// Replace the generic constraint messages with resource-specific ones
    pub fn with_messages(self, conflict: &str, invalid_reference: &str) -> Self {
        match self {
            DomainError::Conflict(_) => DomainError::Conflict(conflict.to_string()),
            DomainError::InvalidReference(_) => {
                DomainError::InvalidReference(invalid_reference.to_string())
            }
            other => other,
        }
    }
}
