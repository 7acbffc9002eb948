//! llama.cpp argument construction for gptllama-runtime.
//!
//! This module provides everything between an inbound request and the
//! command line handed to llama.cpp:
//! - Operator argument validation
//! - Request parameter translation and merging over defaults
//! - Command invocation building
//!
//! # Public API
//!
//! ```rust,ignore
//! use gptllama_runtime::llama::{
//!     ParameterMapper,
//!     validate_user_args,
//!     LlamaCommandBuilder,
//! };
//! ```

// === Submodules ===

pub mod args;
pub mod error;
pub mod invocation;

// === Public API (facade) ===

// Error types
pub use error::{ArgsError, ArgsResult, UserArgError, UserArgErrors};

// Args resolution
pub use args::{
    ArgumentVector, ParameterMapper, merge_parameters, serialize_parameters, translate_request,
    validate_user_args,
};

// Command building
pub use invocation::{LlamaCommandBuilder, log_command_execution};
