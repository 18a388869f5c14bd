use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::value_objects::Language;

/// A previously observed user query and how often it was seen.
///
/// Queries are compared on the normalized key (trimmed, case-folded);
/// the original casing is kept for display. `first_seen` drives the
/// tie-break between entries with equal counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionEntry {
    pub text: String,
    pub normalized: String,
    pub count: u64,
    pub language: Language,
    pub first_seen: DateTime<Utc>,
}

impl SuggestionEntry {
    pub fn new(text: &str, language: Language) -> Self {
        Self {
            text: text.trim().to_string(),
            normalized: normalize_query(text),
            count: 1,
            language,
            first_seen: Utc::now(),
        }
    }
}

/// Normalized form used to detect repeats of the same query.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fold_case_and_whitespace() {
        assert_eq!(normalize_query("  Red Wine "), "red wine");
    }

    #[test]
    fn should_keep_original_casing_for_display() {
        let entry = SuggestionEntry::new("  Red Wine ", Language::En);
        assert_eq!(entry.text, "Red Wine");
        assert_eq!(entry.normalized, "red wine");
        assert_eq!(entry.count, 1);
    }
}
