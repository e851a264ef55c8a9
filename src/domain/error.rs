//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the board's structural rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("group not found: {0}")]
    GroupNotFound(String),

    #[error("malformed entry in group '{group}': {message}")]
    MalformedEntry { group: String, message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
