use business::domain::advice::services::FoodPairingService;
use business::domain::catalog::value_objects::WineColor;

/// Static per-color pairing table.
pub struct StaticFoodPairings;

impl FoodPairingService for StaticFoodPairings {
    fn pairings_for(&self, color: WineColor) -> Vec<String> {
        let pairings: &[&str] = match color {
            WineColor::Red => &[
                "Grilled steak",
                "Roast lamb",
                "Aged cheddar",
                "Mushroom risotto",
            ],
            WineColor::White => &[
                "Grilled fish",
                "Roast chicken",
                "Goat cheese",
                "Creamy pasta",
            ],
            WineColor::Rose => &[
                "Mediterranean salads",
                "Grilled salmon",
                "Charcuterie",
                "Soft cheeses",
            ],
            WineColor::Sparkling => &["Oysters", "Sushi", "Fried appetizers", "Fruit desserts"],
        };
        pairings.iter().map(|p| p.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_pairings_for_every_color() {
        let service = StaticFoodPairings;
        for color in [
            WineColor::Red,
            WineColor::White,
            WineColor::Rose,
            WineColor::Sparkling,
        ] {
            assert!(!service.pairings_for(color).is_empty());
        }
    }
}
