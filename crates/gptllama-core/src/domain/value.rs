//! Value tags for operator-supplied argument values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of value a recognized operator argument expects.
///
/// The same enumeration tags parsed values, so a mismatch between the
/// expected kind and a [`ParsedValue::kind`] is a plain equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// A value that opens with an integer (e.g. `threads 8`).
    Numeric,
    /// Free-form text (e.g. `lora weights.bin`).
    Text,
    /// A switch that takes no value (e.g. `mlock`).
    FlagOnly,
}

impl ValueKind {
    /// Whether an argument of this kind must be followed by a value token.
    pub const fn requires_value(self) -> bool {
        !matches!(self, Self::FlagOnly)
    }

    /// Name used in operator-facing error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "number",
            Self::Text => "string",
            Self::FlagOnly => "flag",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value token after the explicit parse step.
///
/// A token counts as an integer when, after leading whitespace, it opens
/// with an optional sign and a decimal digit (or `0x` and a hex digit). Only
/// that leading run is kept, so `4cores` is `Integer(4)` and `1.18` is
/// `Integer(1)`. Everything else, `.5` and `weights.bin` included, is text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    Integer(i64),
    Text(String),
}

impl ParsedValue {
    /// Parse a raw operator token into a tagged value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gptllama_core::{ParsedValue, ValueKind};
    ///
    /// assert_eq!(ParsedValue::parse("8"), ParsedValue::Integer(8));
    /// assert_eq!(ParsedValue::parse("0x10"), ParsedValue::Integer(16));
    /// assert_eq!(ParsedValue::parse("1.1").kind(), ValueKind::Numeric);
    /// assert_eq!(ParsedValue::parse("weights.bin").kind(), ValueKind::Text);
    /// ```
    pub fn parse(token: &str) -> Self {
        parse_integer_prefix(token).map_or_else(|| Self::Text(token.to_string()), Self::Integer)
    }

    /// The tag of this value, comparable against an expected [`ValueKind`].
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Numeric,
            Self::Text(_) => ValueKind::Text,
        }
    }
}

/// Read the leading integer of `token`, saturating on overflow.
fn parse_integer_prefix(token: &str) -> Option<i64> {
    let rest = token.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: Option<i64> = None;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        let acc = value.unwrap_or(0);
        value = Some(
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit)),
        );
    }

    value.map(|v| if negative { v.saturating_neg() } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_tokens_are_numeric() {
        assert_eq!(ParsedValue::parse("8"), ParsedValue::Integer(8));
        assert_eq!(ParsedValue::parse("-3"), ParsedValue::Integer(-3));
        assert_eq!(ParsedValue::parse(" 12 "), ParsedValue::Integer(12));
    }

    #[test]
    fn test_decimal_tokens_keep_integer_prefix() {
        assert_eq!(ParsedValue::parse("1.18"), ParsedValue::Integer(1));
        assert_eq!(ParsedValue::parse("1.18").kind(), ValueKind::Numeric);
    }

    #[test]
    fn test_numeric_prefix_is_numeric() {
        assert_eq!(ParsedValue::parse("4cores"), ParsedValue::Integer(4));
        assert_eq!(ParsedValue::parse("8bit.bin"), ParsedValue::Integer(8));
        assert_eq!(ParsedValue::parse("+7"), ParsedValue::Integer(7));
    }

    #[test]
    fn test_hex_tokens_are_numeric() {
        assert_eq!(ParsedValue::parse("0x10"), ParsedValue::Integer(16));
        assert_eq!(ParsedValue::parse("0XfF"), ParsedValue::Integer(255));
        assert_eq!(ParsedValue::parse("-0x10"), ParsedValue::Integer(-16));
    }

    #[test]
    fn test_tokens_without_leading_digit_are_text() {
        assert_eq!(ParsedValue::parse(".5").kind(), ValueKind::Text);
        assert_eq!(ParsedValue::parse("-").kind(), ValueKind::Text);
        assert_eq!(ParsedValue::parse("0x").kind(), ValueKind::Text);
        assert_eq!(ParsedValue::parse("0xg").kind(), ValueKind::Text);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(
            ParsedValue::parse("99999999999999999999999"),
            ParsedValue::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::Numeric.to_string(), "number");
        assert_eq!(ValueKind::Text.to_string(), "string");
        assert!(!ValueKind::FlagOnly.requires_value());
        assert!(ValueKind::Text.requires_value());
    }
}
