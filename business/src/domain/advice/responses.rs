use crate::domain::advice::model::Preferences;
use crate::domain::catalog::model::Wine;
use crate::domain::catalog::value_objects::{Language, PriceRange, WineColor};

/// Clarification prompt returned when a message yields no extractable
/// preference and no recommendation intent.
pub fn ask_for_preferences(language: Language) -> String {
    match language {
        Language::En => "I'd be happy to help you find the perfect wine! To give you the best recommendations, could you tell me:\n\n\
            • What color wine do you prefer? (Red, White, Rosé, or Sparkling)\n\
            • What's your budget range? (Budget: €0-10, Mid-range: €10-25, Premium: €25-50, Luxury: €50+)\n\
            • What's the occasion or what food will you be pairing it with?",
        Language::Fr => "Je serais ravi de vous aider à trouver le vin parfait ! Pour vous donner les meilleures recommandations, pourriez-vous me dire :\n\n\
            • Quelle couleur de vin préférez-vous ? (Rouge, Blanc, Rosé, ou Effervescent)\n\
            • Quelle est votre gamme de budget ? (Économique : €0-10, Milieu de gamme : €10-25, Premium : €25-50, Luxe : €50+)\n\
            • Quelle est l'occasion ou avec quels plats l'accompagnerez-vous ?",
        Language::Nl => "Ik help u graag de perfecte wijn te vinden! Om u de beste aanbevelingen te geven, kunt u me vertellen:\n\n\
            • Welke wijnkleur heeft uw voorkeur? (Rood, Wit, Rosé, of Mousserende)\n\
            • Wat is uw budgetbereik? (Budget: €0-10, Middensegment: €10-25, Premium: €25-50, Luxe: €50+)\n\
            • Wat is de gelegenheid of bij welk eten wilt u de wijn combineren?",
    }
    .to_string()
}

/// Templated advice used when the text generator is unavailable.
///
/// Mirrors the structure of a generated answer: greeting, extracted
/// preferences, the ranked wines as a bullet list, closing line.
pub fn fallback_advice(
    language: Language,
    preferences: &Preferences,
    recommendations: &[Wine],
) -> String {
    let mut response = greeting(language).to_string();

    if let Some(color) = preferences.color {
        response.push(' ');
        response.push_str(&color_phrase(language, color));
    }
    if let Some(range) = preferences.price_range {
        response.push(' ');
        response.push_str(&price_phrase(language, range));
    }

    response.push_str(".\n\n");
    response.push_str(found_line(language, recommendations.len()));

    if !recommendations.is_empty() {
        let details: Vec<String> = recommendations
            .iter()
            .map(|wine| format!("• {} - €{}", wine.product_name, wine.price))
            .collect();
        response.push_str("\n\n");
        response.push_str(&details.join("\n"));
    }

    response.push_str("\n\n");
    response.push_str(closing(language));
    response
}

fn greeting(language: Language) -> &'static str {
    match language {
        Language::En => "I'd be happy to help you find the perfect wine!",
        Language::Fr => "Je serais ravi de vous aider à trouver le vin parfait !",
        Language::Nl => "Ik help u graag de perfecte wijn te vinden!",
    }
}

fn color_phrase(language: Language, color: WineColor) -> String {
    match language {
        Language::En => format!("Looking for {} wines", color),
        Language::Fr => {
            let adjective = match color {
                WineColor::Red => "rouges",
                WineColor::White => "blancs",
                WineColor::Rose => "rosés",
                WineColor::Sparkling => "effervescents",
            };
            format!("Recherche de vins {}", adjective)
        }
        Language::Nl => {
            let adjective = match color {
                WineColor::Red => "rode",
                WineColor::White => "witte",
                WineColor::Rose => "rosé",
                WineColor::Sparkling => "mousserende",
            };
            format!("Op zoek naar {} wijnen", adjective)
        }
    }
}

fn price_phrase(language: Language, range: PriceRange) -> String {
    match language {
        Language::En => format!("in the {} price range", range),
        Language::Fr => {
            let label = match range {
                PriceRange::Budget => "économique",
                PriceRange::Mid => "moyenne",
                PriceRange::Premium => "premium",
                PriceRange::Luxury => "luxe",
            };
            format!("dans la gamme de prix {}", label)
        }
        Language::Nl => {
            let label = match range {
                PriceRange::Budget => "budget",
                PriceRange::Mid => "middensegment",
                PriceRange::Premium => "premium",
                PriceRange::Luxury => "luxe",
            };
            format!("in het {} prijsbereik", label)
        }
    }
}

fn found_line(language: Language, count: usize) -> &'static str {
    match (language, count) {
        (Language::En, 0) => "Let me suggest some wines from our selection:",
        (Language::En, _) => "I found some excellent options for you:",
        (Language::Fr, 0) => "Permettez-moi de vous suggérer quelques vins de notre sélection :",
        (Language::Fr, _) => "J'ai trouvé d'excellentes options pour vous :",
        (Language::Nl, 0) => "Laat me enkele wijnen uit onze selectie voorstellen:",
        (Language::Nl, _) => "Ik heb uitstekende opties voor u gevonden:",
    }
}

fn closing(language: Language) -> &'static str {
    match language {
        Language::En => "These wines are available in our selection and would be perfect for your needs!",
        Language::Fr => "Ces vins sont disponibles dans notre sélection et seraient parfaits pour vos besoins !",
        Language::Nl => "Deze wijnen zijn verkrijgbaar in onze selectie en zouden perfect zijn voor uw behoeften!",
    }
}
