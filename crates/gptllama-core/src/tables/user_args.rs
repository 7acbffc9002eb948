//! Whitelist of operator-supplied arguments.

use indexmap::IndexMap;

use super::TableError;
use crate::domain::ValueKind;

/// Bare operator argument names and the kind of value each expects.
///
/// Operators pass these without dashes (`threads 8 mlock`); they are
/// re-emitted with a `--` prefix once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedUserArguments {
    entries: IndexMap<String, ValueKind>,
}

impl RecognizedUserArguments {
    /// The arguments operators may forward to llama.cpp.
    pub fn standard() -> Self {
        let entries = [
            ("threads", ValueKind::Numeric),
            ("ctx_size", ValueKind::Numeric),
            ("repeat_penalty", ValueKind::Numeric),
            ("mlock", ValueKind::FlagOnly),
            ("lora", ValueKind::Text),
            ("lora-base", ValueKind::Text),
        ]
        .into_iter()
        .map(|(name, kind)| (name.to_string(), kind))
        .collect();
        Self { entries }
    }

    /// Build a custom whitelist.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, ValueKind)>,
        K: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (name, kind) in pairs {
            let name = name.into();
            if name.is_empty() || name.starts_with('-') {
                return Err(TableError::InvalidArgumentName(name));
            }
            entries.insert(name, kind);
        }
        Ok(Self { entries })
    }

    /// Expected value kind for a token, or `None` if the token is not a recognized name.
    pub fn kind_of(&self, token: &str) -> Option<ValueKind> {
        self.entries.get(token).copied()
    }

    pub fn is_recognized(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Iterate `(name, kind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueKind)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), *kind))
    }
}

impl Default for RecognizedUserArguments {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_whitelist() {
        let args = RecognizedUserArguments::standard();
        assert_eq!(args.kind_of("threads"), Some(ValueKind::Numeric));
        assert_eq!(args.kind_of("mlock"), Some(ValueKind::FlagOnly));
        assert_eq!(args.kind_of("lora-base"), Some(ValueKind::Text));
        assert!(!args.is_recognized("--threads"));
        assert!(!args.is_recognized("8"));
    }

    #[test]
    fn test_from_pairs_rejects_dashed_names() {
        let err = RecognizedUserArguments::from_pairs([("--threads", ValueKind::Numeric)])
            .unwrap_err();
        assert_eq!(err, TableError::InvalidArgumentName("--threads".to_string()));
    }
}
