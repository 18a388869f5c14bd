use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::catalog::value_objects::Language;
use crate::domain::logger::Logger;
use crate::domain::suggestion::model::{SuggestionEntry, normalize_query};
use crate::domain::suggestion::repository::SuggestionRepository;

/// Curated per-language seed prompts shown while little observed data
/// exists for a language.
const FALLBACK_SUGGESTIONS_EN: &[&str] = &[
    "I want a red wine for dinner",
    "Suggest a budget-friendly white wine",
    "Which sparkling wine for a celebration?",
    "A good wine to pair with cheese",
    "Recommend a premium red wine",
    "What rosé do you have for summer?",
];

const FALLBACK_SUGGESTIONS_FR: &[&str] = &[
    "Je cherche un vin rouge pour le dîner",
    "Suggérez un vin blanc économique",
    "Quel mousseux pour une fête ?",
    "Un bon vin pour accompagner le fromage",
    "Recommandez un vin rouge premium",
    "Quel rosé pour l'été ?",
];

const FALLBACK_SUGGESTIONS_NL: &[&str] = &[
    "Ik zoek een rode wijn voor het diner",
    "Stel een budgetvriendelijke witte wijn voor",
    "Welke mousserende wijn voor een feest?",
    "Een goede wijn bij kaas",
    "Beveel een premium rode wijn aan",
    "Welke rosé voor de zomer?",
];

/// Frequency-ranked store of observed queries, partitioned by language.
///
/// Entries are created on first observation, incremented on repeats and
/// never deleted. Each partition keeps first-observed order, which is
/// the tie-break between equal counts.
pub struct SuggestionStore {
    partitions: Mutex<HashMap<Language, Vec<SuggestionEntry>>>,
    repository: Arc<dyn SuggestionRepository>,
    logger: Arc<dyn Logger>,
}

impl SuggestionStore {
    /// Loads the persisted entries once at construction, degrading to an
    /// empty store on failure.
    pub async fn load(repository: Arc<dyn SuggestionRepository>, logger: Arc<dyn Logger>) -> Self {
        let entries = match repository.load().await {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(error) => {
                logger.warn(&format!(
                    "Could not load suggestions, starting empty: {}",
                    error
                ));
                Vec::new()
            }
        };

        let mut partitions: HashMap<Language, Vec<SuggestionEntry>> = HashMap::new();
        for entry in entries {
            partitions.entry(entry.language).or_default().push(entry);
        }

        Self {
            partitions: Mutex::new(partitions),
            repository,
            logger,
        }
    }

    /// Records one observation of a query. Blank input is ignored; the
    /// same text in two languages is tracked independently.
    pub async fn add_query(&self, text: &str, language: Language) {
        let normalized = normalize_query(text);
        if normalized.is_empty() {
            return;
        }

        let mut partitions = self.partitions.lock().await;
        let partition = partitions.entry(language).or_default();

        if let Some(entry) = partition
            .iter_mut()
            .find(|entry| entry.normalized == normalized)
        {
            entry.count += 1;
        } else {
            partition.push(SuggestionEntry::new(text, language));
        }

        self.persist(&partitions).await;
    }

    /// The most frequent queries for a language, most observed first,
    /// first-observed order between equal counts, at most `n` entries.
    pub async fn top_suggestions(&self, language: Language, n: usize) -> Vec<String> {
        let partitions = self.partitions.lock().await;
        let Some(partition) = partitions.get(&language) else {
            return Vec::new();
        };

        let mut entries: Vec<&SuggestionEntry> = partition.iter().collect();
        // Stable sort keeps insertion order between equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
            .into_iter()
            .take(n)
            .map(|entry| entry.text.clone())
            .collect()
    }

    /// Static curated prompts, independent of observed data.
    pub fn fallback_suggestions(&self, language: Language) -> Vec<String> {
        let seeds = match language {
            Language::En => FALLBACK_SUGGESTIONS_EN,
            Language::Fr => FALLBACK_SUGGESTIONS_FR,
            Language::Nl => FALLBACK_SUGGESTIONS_NL,
        };
        seeds.iter().map(|s| s.to_string()).collect()
    }

    /// Observed top suggestions padded with fallbacks up to `target`,
    /// skipping fallbacks that duplicate an included suggestion
    /// case-insensitively.
    pub async fn suggested_prompts(&self, language: Language, target: usize) -> Vec<String> {
        let mut prompts = self.top_suggestions(language, target).await;

        for fallback in self.fallback_suggestions(language) {
            if prompts.len() >= target {
                break;
            }
            let duplicate = prompts
                .iter()
                .any(|prompt| normalize_query(prompt) == normalize_query(&fallback));
            if !duplicate {
                prompts.push(fallback);
            }
        }

        prompts
    }

    async fn persist(&self, partitions: &HashMap<Language, Vec<SuggestionEntry>>) {
        // Flatten in fixed language order so the persisted form is
        // deterministic.
        let mut entries: Vec<SuggestionEntry> = Vec::new();
        for language in Language::ALL {
            if let Some(partition) = partitions.get(&language) {
                entries.extend(partition.iter().cloned());
            }
        }

        if let Err(error) = self.repository.save(&entries).await {
            self.logger
                .warn(&format!("Could not persist suggestions: {}", error));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub SuggestionRepo {}

        #[async_trait]
        impl SuggestionRepository for SuggestionRepo {
            async fn load(&self) -> Result<Option<Vec<SuggestionEntry>>, StorageError>;
            async fn save(&self, entries: &[SuggestionEntry]) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn empty_repo() -> Arc<dyn SuggestionRepository> {
        let mut repo = MockSuggestionRepo::new();
        repo.expect_load().returning(|| Ok(None));
        repo.expect_save().returning(|_| Ok(()));
        Arc::new(repo)
    }

    #[tokio::test]
    async fn should_fold_case_and_whitespace_into_one_entry() {
        let store = SuggestionStore::load(empty_repo(), mock_logger()).await;

        store.add_query("Red wine", Language::En).await;
        store.add_query("  red wine ", Language::En).await;

        let top = store.top_suggestions(Language::En, 6).await;
        assert_eq!(top, vec!["Red wine".to_string()]);
    }

    #[tokio::test]
    async fn should_track_languages_independently() {
        let store = SuggestionStore::load(empty_repo(), mock_logger()).await;

        store.add_query("rosé", Language::En).await;
        store.add_query("rosé", Language::Fr).await;

        assert_eq!(store.top_suggestions(Language::En, 6).await.len(), 1);
        assert_eq!(store.top_suggestions(Language::Fr, 6).await.len(), 1);
        assert!(store.top_suggestions(Language::Nl, 6).await.is_empty());
    }

    #[tokio::test]
    async fn should_ignore_blank_queries() {
        let store = SuggestionStore::load(empty_repo(), mock_logger()).await;

        store.add_query("   ", Language::En).await;

        assert!(store.top_suggestions(Language::En, 6).await.is_empty());
    }

    #[tokio::test]
    async fn should_order_by_count_then_first_observed() {
        let store = SuggestionStore::load(empty_repo(), mock_logger()).await;

        store.add_query("first", Language::En).await;
        store.add_query("second", Language::En).await;
        store.add_query("third", Language::En).await;
        store.add_query("third", Language::En).await;

        let top = store.top_suggestions(Language::En, 6).await;
        assert_eq!(top, vec!["third", "first", "second"]);
    }

    #[tokio::test]
    async fn should_cap_top_suggestions_at_n() {
        let store = SuggestionStore::load(empty_repo(), mock_logger()).await;
        for i in 0..10 {
            store.add_query(&format!("query {}", i), Language::En).await;
        }

        assert_eq!(store.top_suggestions(Language::En, 6).await.len(), 6);
    }

    #[tokio::test]
    async fn should_pad_prompts_with_fallbacks() {
        let store = SuggestionStore::load(empty_repo(), mock_logger()).await;
        store.add_query("my own question", Language::En).await;

        let prompts = store.suggested_prompts(Language::En, 6).await;

        assert_eq!(prompts.len(), 6);
        assert_eq!(prompts[0], "my own question");
    }

    #[tokio::test]
    async fn should_not_pad_with_case_insensitive_duplicates() {
        let store = SuggestionStore::load(empty_repo(), mock_logger()).await;
        store
            .add_query("i want a RED WINE for dinner", Language::En)
            .await;

        let prompts = store.suggested_prompts(Language::En, 6).await;

        assert_eq!(prompts.len(), 6);
        let mut normalized: Vec<String> = prompts.iter().map(|p| normalize_query(p)).collect();
        let total = normalized.len();
        normalized.sort();
        normalized.dedup();
        assert_eq!(normalized.len(), total);
    }

    #[tokio::test]
    async fn should_survive_corrupt_persisted_state() {
        let mut repo = MockSuggestionRepo::new();
        repo.expect_load()
            .returning(|| Err(StorageError::Corrupted));
        repo.expect_save().returning(|_| Ok(()));

        let store = SuggestionStore::load(Arc::new(repo), mock_logger()).await;

        assert!(store.top_suggestions(Language::En, 6).await.is_empty());
    }

    #[tokio::test]
    async fn should_restore_partitions_from_persisted_entries() {
        let mut repo = MockSuggestionRepo::new();
        repo.expect_load().returning(|| {
            Ok(Some(vec![
                SuggestionEntry::new("stored en", Language::En),
                SuggestionEntry::new("stored fr", Language::Fr),
            ]))
        });
        repo.expect_save().returning(|_| Ok(()));

        let store = SuggestionStore::load(Arc::new(repo), mock_logger()).await;

        assert_eq!(store.top_suggestions(Language::En, 6).await, vec!["stored en"]);
        assert_eq!(store.top_suggestions(Language::Fr, 6).await, vec!["stored fr"]);
    }
}
