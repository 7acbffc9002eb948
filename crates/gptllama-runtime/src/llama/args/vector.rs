//! The final argument list handed to llama.cpp.

use serde::Serialize;
use std::fmt;

/// Ordered llama.cpp arguments: flag/value pairs followed by operator flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a flag followed by its value.
    pub fn push_pair(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        self.0.push(flag.into());
        self.0.push(value.into());
    }

    /// Append tokens unchanged.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(tokens.into_iter().map(Into::into));
    }

    /// The token following the first occurrence of `flag`.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        let position = self.0.iter().position(|token| token == flag)?;
        self.0.get(position + 1).map(String::as_str)
    }

    /// Number of times `flag` appears.
    pub fn count(&self, flag: &str) -> usize {
        self.0.iter().filter(|token| *token == flag).count()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ArgumentVector {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl IntoIterator for ArgumentVector {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgumentVector {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ArgumentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
