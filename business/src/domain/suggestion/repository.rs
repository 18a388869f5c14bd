use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::SuggestionEntry;

/// Persistence port for observed queries, all languages flattened.
#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<SuggestionEntry>>, StorageError>;
    async fn save(&self, entries: &[SuggestionEntry]) -> Result<(), StorageError>;
}
