use crate::domain::advice::model::Preferences;
use crate::domain::catalog::value_objects::{PriceRange, WineColor};

/// Color trigger groups, tested in a fixed priority order; the first
/// group with a hit resolves the dimension. Grape names count as
/// triggers for their color.
const COLOR_TRIGGERS: &[(WineColor, &[&str])] = &[
    (
        WineColor::Red,
        &["red", "rouge", "rood", "cabernet", "merlot", "syrah"],
    ),
    (
        WineColor::White,
        &["white", "blanc", "wit", "chardonnay", "sauvignon"],
    ),
    (WineColor::Rose, &["rosé", "rose", "gris"]),
    (
        WineColor::Sparkling,
        &["sparkling", "champagne", "mousseux", "mousserende", "brut"],
    ),
];

/// Price trigger groups. The budget → premium → luxury → mid order is a
/// deliberate tie-break policy and must stay stable.
const PRICE_TRIGGERS: &[(PriceRange, &[&str])] = &[
    (
        PriceRange::Budget,
        &[
            "budget",
            "cheap",
            "économique",
            "goedkoop",
            "under 10",
            "moins de 10",
        ],
    ),
    (
        PriceRange::Premium,
        &[
            "premium",
            "expensive",
            "cher",
            "duur",
            "over 25",
            "plus de 25",
        ],
    ),
    (
        PriceRange::Luxury,
        &["luxury", "luxe", "over 50", "plus de 50"],
    ),
    (PriceRange::Mid, &["mid", "medium", "moyen"]),
];

/// Food mentions are collected in keyword-list order, not in the order
/// they appear in the text.
const FOOD_KEYWORDS: &[&str] = &[
    "meat",
    "fish",
    "cheese",
    "pasta",
    "chicken",
    "beef",
    "seafood",
    "dessert",
    "viande",
    "poisson",
    "fromage",
    "pâtes",
    "poulet",
    "bœuf",
    "fruits de mer",
    "vlees",
    "kaas",
];

const OCCASION_KEYWORDS: &[&str] = &[
    "dinner",
    "party",
    "celebration",
    "romantic",
    "wedding",
    "dîner",
    "fête",
    "célébration",
    "diner",
    "feest",
    "bruiloft",
];

/// Classifies a piece of text into a wine color using the trigger table.
///
/// Shared between message extraction and product-name matching so both
/// resolve ambiguous text ("Cabernet Sauvignon") the same way.
pub fn classify_color(text: &str) -> Option<WineColor> {
    let lower = text.to_lowercase();
    COLOR_TRIGGERS
        .iter()
        .find(|(_, triggers)| matches_any(&lower, triggers))
        .map(|(color, _)| *color)
}

/// Extracts structured preferences from a free-text message.
///
/// Pure and case-insensitive; a miss on any dimension leaves that field
/// empty rather than failing.
pub fn extract_preferences(message: &str) -> Preferences {
    let lower = message.to_lowercase();

    let color = COLOR_TRIGGERS
        .iter()
        .find(|(_, triggers)| matches_any(&lower, triggers))
        .map(|(color, _)| *color);

    let price_range = PRICE_TRIGGERS
        .iter()
        .find(|(_, triggers)| matches_any(&lower, triggers))
        .map(|(range, _)| *range);

    Preferences {
        color,
        price_range,
        food: collect_keywords(&lower, FOOD_KEYWORDS),
        occasion: collect_keywords(&lower, OCCASION_KEYWORDS),
    }
}

fn matches_any(text: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| text.contains(trigger))
}

fn collect_keywords(text: &str, keywords: &[&str]) -> String {
    let mut hits: Vec<&str> = Vec::new();
    for keyword in keywords {
        if text.contains(*keyword) {
            hits.push(keyword);
        }
    }
    hits.join(" ")
}
