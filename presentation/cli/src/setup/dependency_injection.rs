use std::sync::Arc;

use logger::TracingLogger;
use openai::client::OpenAIClient;
use openai::text_generator::TextGeneratorOpenAI;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::suggestion::repository::SuggestionRepositoryPostgres;

use business::application::advice::get_advice::GetWineAdviceUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::suggestion::store::SuggestionStore;
use business::domain::advice::services::{FoodPairingService, TextGeneratorService};
use business::domain::advice::use_cases::get_advice::GetWineAdviceUseCase;
use business::domain::cart::repository::CartRepository;
use business::domain::logger::Logger;
use business::domain::suggestion::repository::SuggestionRepository;

use crate::config::openai_config::OpenAIConfig;
use crate::setup::food_pairings::StaticFoodPairings;

pub struct DependencyContainer {
    pub advice: Arc<dyn GetWineAdviceUseCase>,
    pub cart: Arc<CartStore>,
    pub suggestions: Arc<SuggestionStore>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cart_repository: Arc<dyn CartRepository> =
            Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let suggestion_repository: Arc<dyn SuggestionRepository> =
            Arc::new(SuggestionRepositoryPostgres::new(pool));

        let openai_config = OpenAIConfig::from_env();
        let openai_client = OpenAIClient::new(openai_config.api_key);
        let generator: Arc<dyn TextGeneratorService> =
            Arc::new(TextGeneratorOpenAI::new(openai_client));
        let pairings: Arc<dyn FoodPairingService> = Arc::new(StaticFoodPairings);

        // Advisory use case
        let advice = Arc::new(GetWineAdviceUseCaseImpl {
            generator,
            pairings,
            logger: logger.clone(),
        });

        // Stores load their persisted snapshots once here
        let cart = Arc::new(CartStore::load(cart_repository, logger.clone()).await);
        let suggestions = Arc::new(SuggestionStore::load(suggestion_repository, logger).await);

        Ok(Self {
            advice,
            cart,
            suggestions,
        })
    }
}
