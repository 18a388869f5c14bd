use serde::{Deserialize, Serialize};

/// Wine color as extracted from a user message or a product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WineColor {
    Red,
    White,
    Rose,
    Sparkling,
}

impl std::fmt::Display for WineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WineColor::Red => write!(f, "red"),
            WineColor::White => write!(f, "white"),
            WineColor::Rose => write!(f, "rose"),
            WineColor::Sparkling => write!(f, "sparkling"),
        }
    }
}

impl std::str::FromStr for WineColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(WineColor::Red),
            "white" => Ok(WineColor::White),
            "rose" => Ok(WineColor::Rose),
            "sparkling" => Ok(WineColor::Sparkling),
            _ => Err(format!("Invalid wine color: {}", s)),
        }
    }
}

/// Coarse price bands used to filter the catalog.
///
/// Bands are inclusive on the lower bound and exclusive on the upper
/// bound, except for the open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Budget,
    Mid,
    Premium,
    Luxury,
}

impl PriceRange {
    /// Lower bound (inclusive) and upper bound (exclusive) in euro.
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            PriceRange::Budget => (0.0, Some(10.0)),
            PriceRange::Mid => (10.0, Some(25.0)),
            PriceRange::Premium => (25.0, Some(50.0)),
            PriceRange::Luxury => (50.0, None),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        let (lower, upper) = self.bounds();
        price >= lower && upper.is_none_or(|bound| price < bound)
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceRange::Budget => write!(f, "budget"),
            PriceRange::Mid => write!(f, "mid"),
            PriceRange::Premium => write!(f, "premium"),
            PriceRange::Luxury => write!(f, "luxury"),
        }
    }
}

impl std::str::FromStr for PriceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(PriceRange::Budget),
            "mid" => Ok(PriceRange::Mid),
            "premium" => Ok(PriceRange::Premium),
            "luxury" => Ok(PriceRange::Luxury),
            _ => Err(format!("Invalid price range: {}", s)),
        }
    }
}

/// Languages the advisor answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    Nl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Nl];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Fr => write!(f, "fr"),
            Language::Nl => write!(f, "nl"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "nl" => Ok(Language::Nl),
            _ => Err(format!("Invalid language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_keep_budget_band_below_ten() {
        assert!(PriceRange::Budget.contains(0.0));
        assert!(PriceRange::Budget.contains(9.99));
        assert!(!PriceRange::Budget.contains(10.0));
    }

    #[test]
    fn should_keep_mid_band_between_ten_and_twenty_five() {
        assert!(PriceRange::Mid.contains(10.0));
        assert!(PriceRange::Mid.contains(24.99));
        assert!(!PriceRange::Mid.contains(25.0));
        assert!(!PriceRange::Mid.contains(9.99));
    }

    #[test]
    fn should_keep_premium_band_between_twenty_five_and_fifty() {
        assert!(PriceRange::Premium.contains(25.0));
        assert!(PriceRange::Premium.contains(49.99));
        assert!(!PriceRange::Premium.contains(50.0));
    }

    #[test]
    fn should_keep_luxury_band_open_ended() {
        assert!(PriceRange::Luxury.contains(50.0));
        assert!(PriceRange::Luxury.contains(1200.0));
        assert!(!PriceRange::Luxury.contains(49.99));
    }

    #[test]
    fn should_round_trip_wine_color_strings() {
        for color in [
            WineColor::Red,
            WineColor::White,
            WineColor::Rose,
            WineColor::Sparkling,
        ] {
            assert_eq!(WineColor::from_str(&color.to_string()), Ok(color));
        }
    }

    #[test]
    fn should_reject_unknown_language() {
        assert!(Language::from_str("de").is_err());
    }

    #[test]
    fn should_round_trip_language_strings() {
        for language in Language::ALL {
            assert_eq!(Language::from_str(&language.to_string()), Ok(language));
        }
    }
}
