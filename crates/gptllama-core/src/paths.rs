//! Path helpers for llama.cpp binaries and model files.
//!
//! Clients select a model by sending its path in the `Authorization` header
//! (`Bearer /models/7B/ggml-model.bin`), so paths arrive in whatever
//! separator style the client uses and are normalized for the host here.

use std::path::MAIN_SEPARATOR;
use thiserror::Error;

/// Errors that can occur while resolving binary or model paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The request carried no `Authorization` header.
    #[error("Missing Authorization header; send the model path as 'Bearer <path>'")]
    MissingAuthorization,

    /// The header has no path after the scheme.
    #[error("Malformed Authorization header '{0}'; expected 'Bearer <path>'")]
    MalformedAuthorization(String),

    /// No llama.cpp binary has been configured.
    #[error("LLAMA_PATH is not set; point it at the llama.cpp binary")]
    LlamaPathNotSet,
}

/// Rewrite every separator in `path` to the host platform's separator.
pub fn normalize_path(path: &str) -> String {
    normalize_path_with(path, MAIN_SEPARATOR)
}

/// Rewrite every separator in `path` to `separator`.
///
/// ```rust
/// use gptllama_core::paths::normalize_path_with;
///
/// assert_eq!(normalize_path_with(r"C:\models\7B", '/'), "C:/models/7B");
/// assert_eq!(normalize_path_with("models/7B", '\\'), r"models\7B");
/// ```
pub fn normalize_path_with(path: &str, separator: char) -> String {
    if separator == '\\' {
        path.replace('/', "\\")
    } else {
        path.replace('\\', "/")
    }
}

/// The final segment of a model path, accepting either separator style.
pub fn model_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Extract the model path carried in an `Authorization` header value.
pub fn model_path_from_authorization(header: Option<&str>) -> Result<String, PathError> {
    let header = header.ok_or(PathError::MissingAuthorization)?;
    header
        .split(' ')
        .nth(1)
        .filter(|path| !path.is_empty())
        .map(normalize_path)
        .ok_or_else(|| PathError::MalformedAuthorization(header.to_string()))
}
