//! llama.cpp command invocation builder.
//!
//! Turns an [`ArgumentVector`] into a [`Command`] ready for the caller to
//! spawn. Nothing in this crate executes it.

use super::args::ArgumentVector;
use std::path::PathBuf;
use std::process::Command;

/// Builder for constructing a llama.cpp command.
///
/// # Example
///
/// ```rust,ignore
/// let cmd = LlamaCommandBuilder::new(llama_path)
///     .model(model_path)
///     .args(mapper.map(&request)?)
///     .arg("--prompt", Some(prompt))
///     .build();
/// ```
pub struct LlamaCommandBuilder {
    binary_path: PathBuf,
    model_path: Option<PathBuf>,
    args: ArgumentVector,
    additional_args: Vec<(String, Option<String>)>,
}

impl LlamaCommandBuilder {
    /// Create a new builder for the given binary.
    pub fn new(binary_path: impl Into<PathBuf>) -> Self {
        Self {
            binary_path: binary_path.into(),
            model_path: None,
            args: ArgumentVector::new(),
            additional_args: Vec::new(),
        }
    }

    /// Set the model file passed with `-m`.
    pub fn model(mut self, model_path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(model_path.into());
        self
    }

    /// Set the argument vector produced by the parameter mapper.
    pub fn args(mut self, args: ArgumentVector) -> Self {
        self.args = args;
        self
    }

    /// Add an additional flag with an optional value.
    ///
    /// # Arguments
    /// * `key` - The flag name (e.g., "--prompt", "--embedding")
    /// * `value` - Optional value for the flag
    pub fn arg(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.additional_args
            .push((key.into(), value.map(Into::into)));
        self
    }

    /// Add a boolean flag (flag with no value).
    pub fn flag(self, key: impl Into<String>) -> Self {
        self.arg(key, None::<String>)
    }

    /// Every argument in launch order, without the program.
    ///
    /// 1. Model path (`-m`) if set
    /// 2. The mapped argument vector
    /// 3. Additional flags in the order they were added
    pub fn to_args(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.args.len() + 2 + self.additional_args.len() * 2);
        if let Some(model) = &self.model_path {
            out.push("-m".to_string());
            out.push(model.to_string_lossy().into_owned());
        }
        out.extend(self.args.iter().cloned());
        for (key, value) in &self.additional_args {
            out.push(key.clone());
            if let Some(val) = value {
                out.push(val.clone());
            }
        }
        out
    }

    /// The full command line as a single display string.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.binary_path.to_string_lossy().into_owned()];
        parts.extend(self.to_args());
        parts.join(" ")
    }

    /// Build the final Command ready for execution.
    pub fn build(self) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(self.to_args());
        cmd
    }
}

/// Log the command about to be executed.
pub fn log_command_execution(cmd: &Command) {
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();
    tracing::info!(
        "Executing: {} {}",
        cmd.get_program().to_string_lossy(),
        args.join(" ")
    );
}
