use serde::{Deserialize, Serialize};

/// One raw dish name after rule-based classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDish {
    /// Verbatim input.
    pub original: String,
    /// Canonical name; equals `original` when no rule matched.
    pub standard: String,
    pub cuisine: String,
    /// Alternate spellings or names recognized inside `original`.
    pub aliases: Vec<String>,
}

impl NormalizedDish {
    /// A dish no rule recognized: name passes through, no aliases.
    pub fn unmatched(original: &str, cuisine: &str) -> Self {
        Self {
            original: original.to_string(),
            standard: original.to_string(),
            cuisine: cuisine.to_string(),
            aliases: Vec::new(),
        }
    }

    pub fn is_renamed(&self) -> bool {
        self.standard != self.original
    }
}
