//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        ApplicationError::from(e).into()
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => exitcode::NOT_FOUND,
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Infra(InfraError::Io { .. }) => exitcode::IOERR,
            CliError::Infra(InfraError::Application(e)) => application_exit_code(e),
        }
    }
}

fn application_exit_code(e: &ApplicationError) -> i32 {
    match e {
        ApplicationError::Domain(DomainError::IndexOutOfRange { .. }) => exitcode::USAGE,
        ApplicationError::Domain(DomainError::GroupNotFound(_)) => exitcode::NOT_FOUND,
        ApplicationError::Domain(DomainError::MalformedEntry { .. }) => exitcode::DATAERR,
        ApplicationError::InvalidBoard { .. } | ApplicationError::InvalidScript { .. } => {
            exitcode::DATAERR
        }
        ApplicationError::Config { .. } => exitcode::CONFIG,
        ApplicationError::OperationFailed { source, .. } => {
            if let Some(inner) = source.downcast_ref::<ApplicationError>() {
                application_exit_code(inner)
            } else if source.downcast_ref::<std::io::Error>().is_some() {
                exitcode::NOINPUT
            } else {
                exitcode::SOFTWARE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_out_of_range_move_when_mapping_then_usage() {
        let err: CliError = ApplicationError::from(DomainError::IndexOutOfRange { index: 5, len: 2 }).into();
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }

    #[test]
    fn given_failed_replay_step_when_mapping_then_uses_inner_error() {
        let inner = ApplicationError::from(DomainError::IndexOutOfRange { index: 5, len: 2 });
        let err: CliError = ApplicationError::OperationFailed {
            context: "step 1".to_string(),
            source: Box::new(inner),
        }
        .into();
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }

    #[test]
    fn given_unreadable_file_when_mapping_then_noinput() {
        let err: CliError = ApplicationError::OperationFailed {
            context: "read board".to_string(),
            source: Box::new(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        }
        .into();
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
    }
}
