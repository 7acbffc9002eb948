//! Argument handler.
//!
//! Reads a request body, maps it through the parameter mapper, and prints
//! either the argument vector or the full llama.cpp command line.

use anyhow::Result;
use gptllama_core::{model_path_from_authorization, normalize_path};
use gptllama_runtime::LlamaCommandBuilder;
use std::path::PathBuf;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::parser::{Cli, OutputFormat};

/// Where the request body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSource {
    Inline(String),
    File(PathBuf),
    /// No request given; only defaults and operator arguments apply.
    Empty,
}

impl RequestSource {
    pub fn from_cli(cli: &Cli) -> Self {
        match (&cli.request, &cli.request_file) {
            (Some(body), _) => Self::Inline(body.clone()),
            (None, Some(path)) => Self::File(path.clone()),
            (None, None) => Self::Empty,
        }
    }

    /// Read the request body.
    pub fn read(&self) -> Result<String, CliError> {
        match self {
            Self::Inline(body) => Ok(body.clone()),
            Self::File(path) => Ok(std::fs::read_to_string(path)?),
            Self::Empty => Ok("{}".to_string()),
        }
    }
}

/// Resolve the model path from `--model` or `--authorization`.
pub fn resolve_model(cli: &Cli) -> Result<Option<String>, CliError> {
    if let Some(model) = &cli.model {
        return Ok(Some(normalize_path(model)));
    }
    cli.authorization
        .as_deref()
        .map(|header| model_path_from_authorization(Some(header)))
        .transpose()
        .map_err(CliError::from)
}

/// Map a request body and render it in the requested format.
pub fn render(
    ctx: &CliContext,
    body: &str,
    model: Option<&str>,
    format: OutputFormat,
) -> Result<String, CliError> {
    let args = ctx.mapper.map_json(body)?;

    match format {
        OutputFormat::Json => {
            serde_json::to_string(&args).map_err(|e| CliError::Request(e.to_string()))
        }
        OutputFormat::Shell => {
            let mut builder = LlamaCommandBuilder::new(ctx.settings.llama_binary()?).args(args);
            if let Some(model) = model {
                builder = builder.model(model);
            }
            Ok(builder.command_line())
        }
    }
}

/// Execute the handler for a parsed command line.
pub fn execute(ctx: &CliContext, cli: &Cli) -> Result<()> {
    let body = RequestSource::from_cli(cli).read()?;
    let model = resolve_model(cli)?;

    let output = render(ctx, &body, model.as_deref(), cli.format)?;
    tracing::debug!(format = ?cli.format, "Rendered llama.cpp invocation");
    println!("{output}");
    Ok(())
}
