//! OpenAI request field to llama.cpp flag translation.

use indexmap::IndexMap;

use super::{TableError, check_flag_name};
use crate::domain::{FIELD_MAX_TOKENS, FIELD_STOP, FIELD_TEMPERATURE, FIELD_TOP_P};

/// Maps request field names onto the flag names llama.cpp understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTranslationTable {
    entries: IndexMap<String, String>,
}

impl FieldTranslationTable {
    /// The translation used for OpenAI chat and completion requests.
    pub fn standard() -> Self {
        let entries = [
            (FIELD_TEMPERATURE, "--temp"),
            (FIELD_STOP, "--reverse-prompt"),
            (FIELD_MAX_TOKENS, "--n_predict"),
            (FIELD_TOP_P, "--top_p"),
        ]
        .into_iter()
        .map(|(field, flag)| (field.to_string(), flag.to_string()))
        .collect();
        Self { entries }
    }

    /// Build a custom translation table.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (field, flag) in pairs {
            let flag = flag.into();
            check_flag_name(&flag)?;
            entries.insert(field.into(), flag);
        }
        Ok(Self { entries })
    }

    /// The llama.cpp flag for a request field, or `None` if the field is not translated.
    pub fn flag_for(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Iterate `(field, flag)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, flag)| (field.as_str(), flag.as_str()))
    }
}

impl Default for FieldTranslationTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_translation() {
        let table = FieldTranslationTable::standard();
        assert_eq!(table.flag_for("temperature"), Some("--temp"));
        assert_eq!(table.flag_for("stop"), Some("--reverse-prompt"));
        assert_eq!(table.flag_for("max_tokens"), Some("--n_predict"));
        assert_eq!(table.flag_for("top_p"), Some("--top_p"));
        assert_eq!(table.flag_for("presence_penalty"), None);
    }

    #[test]
    fn test_from_pairs_validates_flags() {
        assert!(FieldTranslationTable::from_pairs([("seed", "--seed")]).is_ok());
        assert!(FieldTranslationTable::from_pairs([("seed", "seed")]).is_err());
    }
}
