//! Domain types for request parameters and operator-supplied values.
//!
//! These are pure data types with no I/O. The runtime crate consumes them
//! when validating operator tokens and building llama.cpp argument vectors.

mod request;
mod stop;
mod value;

pub use request::{
    FIELD_MAX_TOKENS, FIELD_STOP, FIELD_TEMPERATURE, FIELD_TOP_P, ParamValue, RequestParameters,
};
pub use stop::StopCondition;
pub use value::{ParsedValue, ValueKind};
