use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::advice::model::{WineAdvice, WineQuery};
use crate::domain::advice::preferences::extract_preferences;
use crate::domain::advice::ranking::recommend_wines;
use crate::domain::advice::responses;
use crate::domain::advice::services::{FoodPairingService, TextGeneratorService};
use crate::domain::advice::use_cases::get_advice::GetWineAdviceUseCase;
use crate::domain::catalog::model::Wine;
use crate::domain::catalog::value_objects::Language;
use crate::domain::logger::Logger;

const RECOMMENDATION_LIMIT: usize = 4;
/// How many ranked wines are embedded in the generator prompt.
const PROMPT_SAMPLE_SIZE: usize = 3;
const MAX_RESPONSE_TOKENS: u32 = 400;

/// Messages carrying one of these ask for a recommendation even without
/// an extractable preference.
const RECOMMEND_TRIGGERS: &[&str] = &[
    "recommend",
    "suggest",
    "recommande",
    "suggér",
    "conseil",
    "aanbevel",
    "aanraden",
    "advies",
];

/// The advisory orchestrator: extraction → ranking → prose generation
/// with a templated fallback → pairing lookup.
pub struct GetWineAdviceUseCaseImpl {
    pub generator: Arc<dyn TextGeneratorService>,
    pub pairings: Arc<dyn FoodPairingService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWineAdviceUseCase for GetWineAdviceUseCaseImpl {
    async fn execute(&self, query: WineQuery) -> WineAdvice {
        self.logger.info(&format!(
            "Advising on message ({} wines in catalog)",
            query.wines.len()
        ));

        let preferences = extract_preferences(&query.message);

        if preferences.is_empty() && !has_recommendation_intent(&query.message) {
            self.logger.debug("No extractable preference, asking back");
            return WineAdvice {
                message: responses::ask_for_preferences(query.language),
                recommendations: None,
                food_pairings: None,
                needs_more_info: true,
            };
        }

        let recommendations = recommend_wines(&query.wines, &preferences, RECOMMENDATION_LIMIT);

        let system_prompt = build_system_prompt(query.language);
        let user_prompt = build_user_prompt(&query.message, &recommendations);

        let message = match self
            .generator
            .generate(system_prompt, &user_prompt, MAX_RESPONSE_TOKENS)
            .await
        {
            Ok(text) => text,
            Err(error) => {
                self.logger.warn(&format!(
                    "Text generation failed, using templated response: {}",
                    error
                ));
                responses::fallback_advice(query.language, &preferences, &recommendations)
            }
        };

        let food_pairings = preferences
            .color
            .map(|color| self.pairings.pairings_for(color))
            .filter(|pairings| !pairings.is_empty());

        WineAdvice {
            message,
            recommendations: (!recommendations.is_empty()).then_some(recommendations),
            food_pairings,
            needs_more_info: false,
        }
    }
}

fn has_recommendation_intent(message: &str) -> bool {
    let lower = message.to_lowercase();
    RECOMMEND_TRIGGERS
        .iter()
        .any(|trigger| lower.contains(trigger))
}

fn build_system_prompt(language: Language) -> &'static str {
    match language {
        Language::En => {
            "You are a professional wine sommelier for an online wine shop. You have access \
             to the current wine selection and provide expert advice on wine selection, food \
             pairings, and wine knowledge.\n\n\
             Your personality:\n\
             - Knowledgeable but approachable\n\
             - Enthusiastic about wine\n\
             - Helpful and patient\n\
             - Professional yet friendly\n\n\
             Guidelines:\n\
             - Always recommend specific wines from the available selection\n\
             - Explain why each wine is a good choice\n\
             - Consider the user's preferences, budget, and occasion\n\
             - Provide food pairing suggestions when relevant\n\
             - Keep responses concise but informative\n\
             - Include wine details like region, grape variety, and tasting notes when possible"
        }
        Language::Fr => {
            "Vous êtes un sommelier professionnel pour une boutique de vins en ligne. Vous avez \
             accès à la sélection actuelle de vins et fournissez des conseils d'expert sur la \
             sélection de vins, les accords mets-vins, et les connaissances vinicoles.\n\n\
             Votre personnalité :\n\
             - Compétent mais accessible\n\
             - Enthousiaste à propos du vin\n\
             - Serviable et patient\n\
             - Professionnel mais amical\n\n\
             Directives :\n\
             - Recommandez toujours des vins spécifiques de la sélection disponible\n\
             - Expliquez pourquoi chaque vin est un bon choix\n\
             - Considérez les préférences, le budget et l'occasion de l'utilisateur\n\
             - Fournissez des suggestions d'accords mets-vins quand c'est pertinent\n\
             - Gardez les réponses concises mais informatives\n\
             - Incluez les détails du vin comme la région, le cépage, et les notes de dégustation"
        }
        Language::Nl => {
            "U bent een professionele wijnsommelier voor een online wijnwinkel. U heeft toegang \
             tot de huidige wijnselectie en geeft deskundig advies over wijnselectie, wijn-spijs \
             combinaties, en wijnkennis.\n\n\
             Uw persoonlijkheid:\n\
             - Deskundig maar benaderbaar\n\
             - Enthousiast over wijn\n\
             - Behulpzaam en geduldig\n\
             - Professioneel maar vriendelijk\n\n\
             Richtlijnen:\n\
             - Beveel altijd specifieke wijnen aan uit de beschikbare selectie\n\
             - Leg uit waarom elke wijn een goede keuze is\n\
             - Houd rekening met de voorkeuren, budget en gelegenheid van de gebruiker\n\
             - Geef wijn-spijs combinatie suggesties wanneer relevant\n\
             - Houd antwoorden beknopt maar informatief\n\
             - Voeg wijndetails toe zoals regio, druivensoort, en proefnotities"
        }
    }
}

fn build_user_prompt(message: &str, recommendations: &[Wine]) -> String {
    let sample_size = recommendations.len().min(PROMPT_SAMPLE_SIZE);
    let sample = serde_json::to_string_pretty(&recommendations[..sample_size])
        .unwrap_or_else(|_| "[]".to_string());

    format!(
        "User message: \"{}\"\n\n\
         Available wines (sample): {}\n\n\
         Please provide wine advice and recommendations based on the user's request. \
         Include specific wine names from the available wines and explain why they're \
         good choices. Keep the response concise and helpful.",
        message, sample
    )
}
