use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::CartItem;

/// Persistence port for the cart snapshot.
///
/// `load` returns `Ok(None)` when nothing was ever persisted; `save`
/// replaces the whole snapshot. The physical medium is an adapter
/// concern.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError>;
    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError>;
}
