//! Main CLI parser and top-level argument handling.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the resulting invocation is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The argument vector as a JSON array
    #[default]
    Json,
    /// The full command line that would be launched
    Shell,
}

/// Command-line interface for building llama.cpp invocations from
/// OpenAI-style requests.
#[derive(Debug, Parser)]
#[command(name = "gptllama")]
#[command(about = "Build llama.cpp arguments from OpenAI-style completion requests")]
#[command(version)]
pub struct Cli {
    /// Request body as inline JSON
    #[arg(long, value_name = "JSON", conflicts_with = "request_file")]
    pub request: Option<String>,

    /// Read the request body from a file
    #[arg(long = "request-file", value_name = "PATH")]
    pub request_file: Option<PathBuf>,

    /// Model file passed to llama.cpp with -m
    #[arg(short = 'm', long, value_name = "PATH")]
    pub model: Option<String>,

    /// Authorization header value carrying the model path ("Bearer <path>")
    #[arg(long, value_name = "HEADER", conflicts_with = "model")]
    pub authorization: Option<String>,

    /// Path to the llama.cpp binary (overrides LLAMA_PATH)
    #[arg(long = "llama-path", value_name = "PATH")]
    pub llama_path: Option<String>,

    /// Log and drop invalid operator arguments instead of refusing to start
    #[arg(long)]
    pub lenient: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Operator arguments forwarded to llama.cpp (e.g. `threads 8 mlock`)
    #[arg(
        value_name = "LLAMA_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub llama_args: Vec<String>,
}
