//! CLI bootstrap - the composition root.
//!
//! Settings, operator arguments and the parameter mapper are wired together
//! here exactly once. Handlers only ever see the resulting [`CliContext`].

use gptllama_core::{
    OperatorConfig, Settings, UserArgPolicy, normalize_path, validate_settings,
};
use gptllama_runtime::ParameterMapper;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;

/// Everything needed to build a [`CliContext`].
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: Settings,
    pub operator: OperatorConfig,
}

impl CliConfig {
    /// Build the configuration from the environment and parsed flags.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Self::from_parts(cli, Settings::from_env()?)
    }

    /// Apply command-line overrides on top of already-loaded settings.
    pub fn from_parts(cli: &Cli, mut settings: Settings) -> Result<Self, CliError> {
        if let Some(path) = &cli.llama_path {
            settings.llama_path = Some(normalize_path(path));
        }
        if cli.lenient {
            settings.user_arg_policy = UserArgPolicy::Ignore;
        }
        validate_settings(&settings)?;

        let operator = OperatorConfig::new(cli.llama_args.iter().cloned(), settings.user_arg_policy);
        Ok(Self { settings, operator })
    }
}

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub settings: Settings,
    pub mapper: ParameterMapper,
}

/// Validate operator arguments once and build the context.
///
/// Under [`UserArgPolicy::Reject`] invalid operator arguments abort startup
/// with the full error list, so no request is ever mapped with them.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let mapper = ParameterMapper::new(config.operator);

    match mapper.validate_operator_args() {
        Ok(args) => {
            tracing::info!(count = args.len(), "Operator arguments accepted");
        }
        Err(errors) => match mapper.operator().policy() {
            UserArgPolicy::Reject => return Err(CliError::UserArgs(errors)),
            UserArgPolicy::Ignore => {
                tracing::warn!("Args Error: {errors}; operator arguments will be dropped");
            }
        },
    }

    Ok(CliContext {
        settings: config.settings,
        mapper,
    })
}

/// Load a `.env` file from the working directory or its parents, if any.
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`. Logs go to stderr so stdout carries only output.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
