//! Error types for argument construction.
//!
//! Operator-argument problems are accumulated into [`UserArgErrors`] so the
//! operator sees every mistake at once.

use gptllama_core::ValueKind;
use std::fmt;
use thiserror::Error;

/// A single problem found while scanning operator tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserArgError {
    /// A bare token that is neither a recognized name nor the value of one.
    #[error("{token} is not a valid argument.")]
    UnsupportedArgument { token: String },

    /// A value-taking argument is last, or is followed by another argument name.
    #[error("{arg} is missing a value.")]
    MissingValue { arg: String },

    /// A flag-only argument is followed by something that looks like a value.
    #[error("{arg} does not require a value.")]
    UnexpectedValue { arg: String },

    /// The value token parsed to a different kind than the argument expects.
    #[error("{arg} expects a {expected}, not {actual}")]
    TypeMismatch {
        arg: String,
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// Every error from one validation pass, in token order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserArgErrors(Vec<UserArgError>);

impl UserArgErrors {
    /// Wrap collected errors, returning `None` when there are none.
    pub fn new(errors: Vec<UserArgError>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self(errors))
    }

    pub fn errors(&self) -> &[UserArgError] {
        &self.0
    }

    /// Operator-facing messages in token order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn into_inner(self) -> Vec<UserArgError> {
        self.0
    }
}

impl fmt::Display for UserArgErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(" "))
    }
}

impl std::error::Error for UserArgErrors {}

impl<'a> IntoIterator for &'a UserArgErrors {
    type Item = &'a UserArgError;
    type IntoIter = std::slice::Iter<'a, UserArgError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Errors that can occur while building an argument vector for a request.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// The operator's startup arguments failed validation under the reject policy.
    #[error("Args Error: {0}")]
    InvalidUserArgs(UserArgErrors),

    /// The request body could not be read as completion parameters.
    #[error("Invalid request parameters: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

/// Result type alias for argument construction.
pub type ArgsResult<T> = Result<T, ArgsError>;
