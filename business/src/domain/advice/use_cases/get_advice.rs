use async_trait::async_trait;

use crate::domain::advice::model::{WineAdvice, WineQuery};

/// One full advisory round: message in, advice out.
///
/// Never fails: extraction misses become a clarification prompt and
/// generation failures become a templated fallback.
#[async_trait]
pub trait GetWineAdviceUseCase: Send + Sync {
    async fn execute(&self, query: WineQuery) -> WineAdvice;
}
