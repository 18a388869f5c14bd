use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::Wine;

/// Capacity is enforced on distinct items, not on total quantity.
pub const MAX_DISTINCT_ITEMS: usize = 20;
/// Per-item quantity bound, enforced by the store on every write.
pub const MAX_ITEM_QUANTITY: u32 = 10;

/// A cart line. The wine is copied in full at add time, so later
/// catalog updates never change a line already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub wine: Wine,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(wine: Wine, quantity: u32) -> Self {
        Self {
            wine,
            quantity: clamp_quantity(quantity),
            added_at: Utc::now(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.wine.price * f64::from(self.quantity)
    }
}

/// Keeps any requested quantity within the 1..=10 bound.
pub fn clamp_quantity(quantity: u32) -> u32 {
    quantity.clamp(1, MAX_ITEM_QUANTITY)
}
