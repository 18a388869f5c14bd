use async_trait::async_trait;

use crate::domain::catalog::value_objects::WineColor;

use super::errors::AdviceError;

/// Service port for the external text-generation collaborator.
///
/// May fail (timeout, auth, quota); callers are expected to catch the
/// error and fall back to a templated response.
#[async_trait]
pub trait TextGeneratorService: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, AdviceError>;
}

/// Service port for the food-pairing lookup. Pure, no failure mode.
pub trait FoodPairingService: Send + Sync {
    fn pairings_for(&self, color: WineColor) -> Vec<String>;
}
