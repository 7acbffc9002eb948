//! Settings domain types and validation.
//!
//! Settings come from the process environment (optionally seeded from a
//! `.env` file by the binary). Lookup is injected so tests never have to
//! mutate the real environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::operator::UserArgPolicy;
use crate::paths::{PathError, normalize_path};

/// Environment variable naming the llama.cpp binary.
pub const LLAMA_PATH_ENV: &str = "LLAMA_PATH";

/// Environment variable selecting the [`UserArgPolicy`].
pub const USER_ARG_POLICY_ENV: &str = "GPTLLAMA_USER_ARG_POLICY";

/// Application settings structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the llama.cpp binary, already normalized for this platform.
    pub llama_path: Option<String>,

    /// How invalid operator arguments are handled.
    pub user_arg_policy: UserArgPolicy,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llama_path = lookup(LLAMA_PATH_ENV).map(|raw| normalize_path(&raw));
        let user_arg_policy = lookup(USER_ARG_POLICY_ENV)
            .map(|raw| raw.parse::<UserArgPolicy>())
            .transpose()?
            .unwrap_or_default();

        let settings = Self {
            llama_path,
            user_arg_policy,
        };
        validate_settings(&settings)?;
        tracing::debug!(
            llama_path = ?settings.llama_path,
            policy = %settings.user_arg_policy,
            "Loaded settings"
        );
        Ok(settings)
    }

    /// The configured llama.cpp binary.
    pub fn llama_binary(&self) -> Result<PathBuf, PathError> {
        self.llama_path
            .as_deref()
            .map(PathBuf::from)
            .ok_or(PathError::LlamaPathNotSet)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("LLAMA_PATH cannot be empty")]
    EmptyLlamaPath,

    #[error("Unknown user argument policy '{0}' (expected 'reject' or 'ignore')")]
    InvalidPolicy(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings
        .llama_path
        .as_ref()
        .is_some_and(|p| p.trim().is_empty())
    {
        return Err(SettingsError::EmptyLlamaPath);
    }

    Ok(())
}
