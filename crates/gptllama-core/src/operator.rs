//! Operator-supplied configuration captured once at process start.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::settings::SettingsError;

/// What to do with a request when the operator's arguments fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserArgPolicy {
    /// Refuse to build an argument vector. The CLI also refuses to start.
    #[default]
    Reject,

    /// Log a warning and build the vector without any operator arguments.
    Ignore,
}

impl UserArgPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for UserArgPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserArgPolicy {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "ignore" => Ok(Self::Ignore),
            other => Err(SettingsError::InvalidPolicy(other.to_string())),
        }
    }
}

/// Raw operator tokens plus the policy for handling invalid ones.
///
/// Built once by the composition root from the process arguments and then
/// handed to every component that needs it. Nothing downstream reads
/// `std::env::args` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorConfig {
    tokens: Vec<String>,
    policy: UserArgPolicy,
}

impl OperatorConfig {
    /// Capture operator tokens exactly as supplied.
    pub fn new<I, S>(tokens: I, policy: UserArgPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            policy,
        }
    }

    /// Capture the arguments following the program name.
    ///
    /// ```rust
    /// use gptllama_core::{OperatorConfig, UserArgPolicy};
    ///
    /// let argv = ["gptllama", "threads", "8"].map(String::from);
    /// let operator = OperatorConfig::from_process_args(argv, UserArgPolicy::Reject);
    /// assert_eq!(operator.tokens(), ["threads", "8"]);
    /// ```
    pub fn from_process_args<I>(args: I, policy: UserArgPolicy) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::new(args.into_iter().skip(1), policy)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub const fn policy(&self) -> UserArgPolicy {
        self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
