//! Default llama.cpp sampling flags.

use indexmap::IndexMap;

use super::{TableError, check_flag_name};

const STANDARD_DEFAULTS: [(&str, &str); 7] = [
    ("--temp", "0.7"),
    ("--n_predict", "512"),
    ("--top_p", "0.1"),
    ("--top_k", "40"),
    ("-b", "512"),
    ("-c", "2048"),
    ("--repeat_penalty", "1.1764705882352942"),
];

/// Flag name to default value, in the order the flags are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultParameterSet {
    entries: IndexMap<String, String>,
}

impl DefaultParameterSet {
    /// The defaults passed to llama.cpp when a request sets nothing.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_DEFAULTS
                .iter()
                .map(|(flag, value)| ((*flag).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    /// Build a custom default set. Later duplicates replace earlier values
    /// but keep the first position.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (flag, value) in pairs {
            let flag = flag.into();
            check_flag_name(&flag)?;
            entries.insert(flag, value.into());
        }
        Ok(Self { entries })
    }

    /// Default value for a flag, if it has one.
    pub fn get(&self, flag: &str) -> Option<&str> {
        self.entries.get(flag).map(String::as_str)
    }

    /// Iterate `(flag, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(flag, value)| (flag.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DefaultParameterSet {
    fn default() -> Self {
        Self::standard()
    }
}
