use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::catalog::value_objects::Language;
use business::domain::errors::StorageError;
use business::domain::suggestion::model::SuggestionEntry;

/// One persisted observed query, keyed (language, normalized).
#[derive(Debug, FromRow)]
pub struct SuggestionEntity {
    pub language: String,
    pub normalized: String,
    pub text: String,
    pub count: i64,
    pub first_seen: DateTime<Utc>,
}

impl SuggestionEntity {
    pub fn into_domain(self) -> Result<SuggestionEntry, StorageError> {
        let language =
            Language::from_str(&self.language).map_err(|_| StorageError::Corrupted)?;

        Ok(SuggestionEntry {
            text: self.text,
            normalized: self.normalized,
            count: self.count.max(0) as u64,
            language,
            first_seen: self.first_seen,
        })
    }

    pub fn from_domain(entry: &SuggestionEntry) -> Self {
        Self {
            language: entry.language.to_string(),
            normalized: entry.normalized.clone(),
            text: entry.text.clone(),
            count: entry.count as i64,
            first_seen: entry.first_seen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_suggestion_entry() {
        let entry = SuggestionEntry::new("Red wine", Language::En);

        let entity = SuggestionEntity::from_domain(&entry);
        assert_eq!(entity.language, "en");
        assert_eq!(entity.normalized, "red wine");

        let restored = entity.into_domain().unwrap();
        assert_eq!(restored, entry);
    }

    #[test]
    fn should_reject_unknown_language_tag() {
        let entity = SuggestionEntity {
            language: "xx".to_string(),
            normalized: "red wine".to_string(),
            text: "Red wine".to_string(),
            count: 1,
            first_seen: Utc::now(),
        };

        assert!(matches!(
            entity.into_domain(),
            Err(StorageError::Corrupted)
        ));
    }
}
