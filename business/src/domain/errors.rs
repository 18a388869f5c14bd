/// Storage errors for the persisted stores.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.unavailable")]
    Unavailable,
    #[error("storage.corrupted")]
    Corrupted,
}

impl StorageError {
    pub fn unavailable() -> Self {
        StorageError::Unavailable
    }
    pub fn corrupted() -> Self {
        StorageError::Corrupted
    }
}
