//! Fixed lookup tables that drive argument construction.
//!
//! All three tables are built once and never mutated:
//! - [`DefaultParameterSet`]: llama.cpp flags passed on every invocation
//! - [`FieldTranslationTable`]: OpenAI request field to llama.cpp flag
//! - [`RecognizedUserArguments`]: operator argument whitelist with value kinds

mod defaults;
mod translation;
mod user_args;

pub use defaults::DefaultParameterSet;
pub use translation::FieldTranslationTable;
pub use user_args::RecognizedUserArguments;

use thiserror::Error;

/// Errors raised when building a table from caller-supplied entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A flag name does not start with `-`.
    #[error("Flag name must start with '-' or '--', got '{0}'")]
    InvalidFlagName(String),

    /// An operator argument name carries a leading dash or is empty.
    #[error("Operator argument names must be bare words, got '{0}'")]
    InvalidArgumentName(String),
}

fn check_flag_name(flag: &str) -> Result<(), TableError> {
    if flag.len() > 1 && flag.starts_with('-') {
        Ok(())
    } else {
        Err(TableError::InvalidFlagName(flag.to_string()))
    }
}
