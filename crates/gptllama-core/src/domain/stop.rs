//! Stop sequences as sent by OpenAI-compatible clients.

use serde::{Deserialize, Serialize};

/// The `stop` request field, which clients send either as one string or as
/// an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopCondition {
    Single(String),
    Multiple(Vec<String>),
}

impl StopCondition {
    /// Separator used when a list of stop sequences is rendered as one flag value.
    pub const SEPARATOR: &'static str = ",";

    /// Render the condition as a single flag value.
    ///
    /// `Single` passes through unchanged. `Multiple` joins its non-empty
    /// entries with [`Self::SEPARATOR`]. Returns `None` when nothing would be
    /// left to pass, so the flag can be omitted.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Single(sequence) if sequence.is_empty() => None,
            Self::Single(sequence) => Some(sequence.clone()),
            Self::Multiple(sequences) => {
                let joined = sequences
                    .iter()
                    .filter(|s| !s.is_empty())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(Self::SEPARATOR);
                (!joined.is_empty()).then_some(joined)
            }
        }
    }

    /// Iterate over the individual stop sequences regardless of shape.
    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Single(sequence) => std::slice::from_ref(sequence),
            Self::Multiple(sequences) => sequences.as_slice(),
        };
        slice.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_both_shapes() {
        let single: StopCondition = serde_json::from_str(r#""User:""#).unwrap();
        assert_eq!(single, StopCondition::Single("User:".to_string()));

        let multiple: StopCondition = serde_json::from_str(r####"["User:", "###"]"####).unwrap();
        assert_eq!(
            multiple,
            StopCondition::Multiple(vec!["User:".to_string(), "###".to_string()])
        );
    }

    #[test]
    fn test_render_single() {
        let stop = StopCondition::Single("User:".to_string());
        assert_eq!(stop.render().as_deref(), Some("User:"));
        assert_eq!(StopCondition::Single(String::new()).render(), None);
    }

    #[test]
    fn test_render_multiple_joins_non_empty_entries() {
        let stop = StopCondition::Multiple(vec![
            "User:".to_string(),
            String::new(),
            "###".to_string(),
        ]);
        assert_eq!(stop.render().as_deref(), Some("User:,###"));
        assert_eq!(StopCondition::Multiple(Vec::new()).render(), None);
        assert_eq!(StopCondition::Multiple(vec![String::new()]).render(), None);
    }

    #[test]
    fn test_sequences() {
        let single = StopCondition::Single("a".to_string());
        assert_eq!(single.sequences().collect::<Vec<_>>(), vec!["a"]);

        let multiple = StopCondition::Multiple(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(multiple.sequences().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<StopCondition>("42").is_err());
        assert!(serde_json::from_str::<StopCondition>("[1, 2]").is_err());
    }
}
