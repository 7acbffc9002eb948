//! Helpers for building llama.cpp argument vectors.
//!
//! Operator validation runs independently of any request; the mapper
//! combines its output with per-request parameters.

pub mod params;
pub mod user_args;
pub mod vector;

// Re-export public API
pub use params::{ParameterMapper, merge_parameters, serialize_parameters, translate_request};
pub use user_args::validate_user_args;
pub use vector::ArgumentVector;
