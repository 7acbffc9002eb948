//! Request parameters extracted from OpenAI-style completion payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::stop::StopCondition;

/// Request field carrying the sampling temperature.
pub const FIELD_TEMPERATURE: &str = "temperature";
/// Request field carrying the stop sequence(s).
pub const FIELD_STOP: &str = "stop";
/// Request field carrying the generation length limit.
pub const FIELD_MAX_TOKENS: &str = "max_tokens";
/// Request field carrying the nucleus sampling threshold.
pub const FIELD_TOP_P: &str = "top_p";

/// A value destined for a llama.cpp flag.
///
/// Defaults are stored as text; request overrides keep their JSON shape
/// until they are rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Stop(StopCondition),
}

impl ParamValue {
    /// Render the value for the argument vector.
    ///
    /// Returns `None` for falsy values (`0`, `NaN`, empty text, empty stop
    /// lists) so that the flag is dropped entirely instead of being passed
    /// with an empty value.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Number(n) if *n == 0.0 || n.is_nan() => None,
            Self::Number(n) => Some(format_number(*n)),
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(text.clone()),
            Self::Stop(stop) => stop.render(),
        }
    }

    /// Whether the value would be omitted from the argument vector.
    pub fn is_falsy(&self) -> bool {
        self.render().is_none()
    }
}

/// Format a number the way a JavaScript `String(n)` would.
///
/// Magnitudes in `[1e-6, 1e21)` use plain decimal notation, others use
/// exponent notation with a signed exponent (`1e+21`, `1e-7`).
fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let exponent = format!("{n:e}");
    match exponent.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponent,
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<StopCondition> for ParamValue {
    fn from(value: StopCondition) -> Self {
        Self::Stop(value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().as_deref().unwrap_or(""))
    }
}

/// The subset of an inbound completion request that maps onto llama.cpp flags.
///
/// Unknown keys (`messages`, `model`, `stream`, ...) are ignored during
/// deserialization. A JSON `null` is treated the same as an absent key.
///
/// # Examples
///
/// ```rust
/// use gptllama_core::RequestParameters;
///
/// let params = RequestParameters::from_json_str(
///     r#"{"model": "gpt-3.5-turbo", "temperature": 0.2, "max_tokens": 100}"#,
/// ).unwrap();
/// assert_eq!(params.temperature, Some(0.2));
/// assert_eq!(params.max_tokens, Some(100.0));
/// assert!(params.stop.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopCondition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl RequestParameters {
    /// Parse request parameters out of a raw JSON request body.
    ///
    /// The body must be a JSON object.
    pub fn from_json_str(body: &str) -> serde_json::Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(body)?;
        serde_json::from_value(Value::Object(object))
    }

    /// Parse request parameters out of an already-decoded JSON value.
    ///
    /// Arrays are rejected even though a derived struct deserializer would
    /// fill fields from them by position.
    pub fn from_json_value(value: Value) -> serde_json::Result<Self> {
        let object: Map<String, Value> = serde_json::from_value(value)?;
        serde_json::from_value(Value::Object(object))
    }

    /// Present fields as `(request field name, value)` pairs.
    ///
    /// Fields come out in a fixed order: temperature, stop, max tokens, top p.
    pub fn fields(&self) -> Vec<(&'static str, ParamValue)> {
        let mut fields = Vec::with_capacity(4);
        if let Some(temperature) = self.temperature {
            fields.push((FIELD_TEMPERATURE, ParamValue::Number(temperature)));
        }
        if let Some(stop) = &self.stop {
            fields.push((FIELD_STOP, ParamValue::Stop(stop.clone())));
        }
        if let Some(max_tokens) = self.max_tokens {
            fields.push((FIELD_MAX_TOKENS, ParamValue::Number(max_tokens)));
        }
        if let Some(top_p) = self.top_p {
            fields.push((FIELD_TOP_P, ParamValue::Number(top_p)));
        }
        fields
    }

    /// Whether the request carries none of the translatable fields.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
