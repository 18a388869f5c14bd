use serde::Serialize;

use crate::domain::catalog::model::Wine;
use crate::domain::catalog::value_objects::{Language, PriceRange, WineColor};

/// Structured preferences extracted from a free-text message.
///
/// Every field is independently optional; an entirely empty record means
/// no preference could be extracted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub color: Option<WineColor>,
    pub price_range: Option<PriceRange>,
    pub food: String,
    pub occasion: String,
}

impl Preferences {
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.price_range.is_none()
            && self.food.is_empty()
            && self.occasion.is_empty()
    }
}

/// One advisory request: a user message against a catalog snapshot.
#[derive(Debug, Clone)]
pub struct WineQuery {
    pub message: String,
    pub language: Language,
    pub wines: Vec<Wine>,
}

/// The advisor's answer. Recommendations and pairings are typed fields,
/// not sentinel strings embedded in the message text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WineAdvice {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Wine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_pairings: Option<Vec<String>>,
    pub needs_more_info: bool,
}
