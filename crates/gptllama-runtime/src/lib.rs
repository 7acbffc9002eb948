#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod llama;

pub use llama::{
    ArgsError, ArgsResult, ArgumentVector, LlamaCommandBuilder, ParameterMapper, UserArgError,
    UserArgErrors, validate_user_args,
};
