#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod operator;
pub mod paths;
pub mod prompt;
pub mod response;
pub mod settings;
pub mod tables;

// Re-export commonly used types for convenience
pub use domain::{ParamValue, ParsedValue, RequestParameters, StopCondition, ValueKind};
pub use operator::{OperatorConfig, UserArgPolicy};
pub use paths::{PathError, model_name, model_path_from_authorization, normalize_path};
pub use prompt::{PromptMessage, default_messages, messages_to_prompt};
pub use response::{ChatCompletionChunk, ChunkChoice, EmbeddingResponse, Usage, gpt_model_name};
pub use settings::{Settings, SettingsError, validate_settings};
pub use tables::{DefaultParameterSet, FieldTranslationTable, RecognizedUserArguments, TableError};
