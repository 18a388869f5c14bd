use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::CartItem;
use business::domain::catalog::model::Wine;
use business::domain::errors::StorageError;

/// One persisted cart line. The wine is stored as a JSONB payload so
/// the table never needs to track the catalog schema; `position` keeps
/// insertion order stable across reloads.
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub wine_id: String,
    pub wine: serde_json::Value,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
    pub position: i32,
}

impl CartItemEntity {
    pub fn into_domain(self) -> Result<CartItem, StorageError> {
        let wine: Wine =
            serde_json::from_value(self.wine).map_err(|_| StorageError::Corrupted)?;

        Ok(CartItem {
            wine,
            quantity: self.quantity.max(1) as u32,
            added_at: self.added_at,
        })
    }

    pub fn from_domain(item: &CartItem, position: i32) -> Result<Self, StorageError> {
        let wine = serde_json::to_value(&item.wine).map_err(|_| StorageError::Corrupted)?;

        Ok(Self {
            wine_id: item.wine.id.clone(),
            wine,
            quantity: item.quantity as i32,
            added_at: item.added_at,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wine() -> Wine {
        Wine {
            id: "w-1".to_string(),
            product_name: "Château Test".to_string(),
            image: String::new(),
            price: 8.5,
            price_currency: "EUR".to_string(),
            original_price: 8.5,
            volume: "75cl".to_string(),
            price_per_liter: String::new(),
            discount: String::new(),
            link: String::new(),
        }
    }

    #[test]
    fn should_round_trip_cart_item() {
        let item = CartItem::new(wine(), 3);

        let entity = CartItemEntity::from_domain(&item, 0).unwrap();
        assert_eq!(entity.wine_id, "w-1");
        assert_eq!(entity.quantity, 3);

        let restored = entity.into_domain().unwrap();
        assert_eq!(restored, item);
    }

    #[test]
    fn should_reject_corrupt_wine_payload() {
        let entity = CartItemEntity {
            wine_id: "w-1".to_string(),
            wine: serde_json::json!({"unexpected": true}),
            quantity: 1,
            added_at: Utc::now(),
            position: 0,
        };

        assert!(matches!(
            entity.into_domain(),
            Err(StorageError::Corrupted)
        ));
    }
}
