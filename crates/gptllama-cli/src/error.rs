//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps
//! library errors to exit codes and user-facing messages.

use gptllama_core::{PathError, SettingsError};
use gptllama_runtime::{ArgsError, UserArgErrors};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Operator arguments failed validation at startup.
    #[error("Args Error: {0}\nPlease double check that your arguments are correct.")]
    UserArgs(UserArgErrors),

    /// Request body or authorization header could not be used.
    #[error("Invalid request: {0}")]
    Request(String),

    /// IO error (request file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 2: Misuse of shell command (invalid operator arguments)
    /// - 65: `EX_DATAERR`
    /// - 74: `EX_IOERR`
    /// - 78: `EX_CONFIG`
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UserArgs(_) => 2,
            Self::Request(_) => 65,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }
}

impl From<ArgsError> for CliError {
    fn from(err: ArgsError) -> Self {
        match err {
            ArgsError::InvalidUserArgs(errors) => Self::UserArgs(errors),
            ArgsError::InvalidRequest(json_err) => Self::Request(json_err.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::LlamaPathNotSet => Self::Config(err.to_string()),
            PathError::MissingAuthorization | PathError::MalformedAuthorization(_) => {
                Self::Request(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gptllama_runtime::UserArgError;

    #[test]
    fn test_user_arg_errors_exit_with_usage() {
        let errors = UserArgErrors::new(vec![UserArgError::MissingValue {
            arg: "threads".to_string(),
        }])
        .unwrap();
        let err = CliError::from(ArgsError::InvalidUserArgs(errors));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "Args Error: threads is missing a value.\nPlease double check that your arguments are correct."
        );
    }

    #[test]
    fn test_path_errors_map_by_cause() {
        assert_eq!(CliError::from(PathError::LlamaPathNotSet).exit_code(), 78);
        assert_eq!(CliError::from(PathError::MissingAuthorization).exit_code(), 65);
    }

    #[test]
    fn test_settings_errors_are_config() {
        let err = CliError::from(SettingsError::EmptyLlamaPath);
        assert_eq!(err.exit_code(), 78);
    }
}
