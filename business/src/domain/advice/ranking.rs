use crate::domain::advice::model::Preferences;
use crate::domain::advice::preferences::classify_color;
use crate::domain::catalog::model::Wine;
use crate::domain::catalog::value_objects::WineColor;

/// Narrows a catalog snapshot down to the items matching the extracted
/// preferences and truncates to `limit`.
///
/// This is a filter-then-truncate ranker: the caller supplies the
/// catalog in its preferred display order and that order is kept. When
/// no item satisfies every set constraint the unfiltered catalog is
/// returned instead, truncated to `limit`, so the user always gets
/// something to look at. An empty catalog yields an empty result.
pub fn recommend_wines(wines: &[Wine], preferences: &Preferences, limit: usize) -> Vec<Wine> {
    let filtered: Vec<&Wine> = wines
        .iter()
        .filter(|wine| matches_color(wine, preferences))
        .filter(|wine| matches_price(wine, preferences))
        .collect();

    let pool: Vec<&Wine> = if filtered.is_empty() {
        wines.iter().collect()
    } else {
        filtered
    };

    pool.into_iter().take(limit).cloned().collect()
}

/// The feed carries no structured color field; a wine's color is read
/// off its product name with the same trigger table used for messages.
fn matches_color(wine: &Wine, preferences: &Preferences) -> bool {
    match preferences.color {
        None => true,
        Some(color) => classify_color(&wine.product_name) == Some(color),
    }
}

fn matches_price(wine: &Wine, preferences: &Preferences) -> bool {
    match preferences.price_range {
        None => true,
        Some(range) => range.contains(wine.price),
    }
}

/// Resolved color of a catalog entry, if its name reveals one.
pub fn wine_color(wine: &Wine) -> Option<WineColor> {
    classify_color(&wine.product_name)
}
