use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use url::Url;

use crate::domain::cart::model::{CartItem, MAX_DISTINCT_ITEMS, clamp_quantity};
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::model::Wine;
use crate::domain::logger::Logger;

/// The persistent shopping cart.
///
/// Single owner of its item list; every mutating operation locks,
/// mutates, then persists before returning, so concurrent callers never
/// lose updates. Persistence failures are logged and absorbed; the
/// in-memory state stays authoritative for the process lifetime.
pub struct CartStore {
    items: Mutex<Vec<CartItem>>,
    repository: Arc<dyn CartRepository>,
    logger: Arc<dyn Logger>,
}

/// One line of the checkout payload handed to the shop frontend.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutLine<'a> {
    id: &'a str,
    name: &'a str,
    price: f64,
    quantity: u32,
    url: &'a str,
}

impl CartStore {
    /// Loads the persisted snapshot once at construction. A missing,
    /// unreadable or corrupt snapshot degrades to an empty cart.
    pub async fn load(repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        let items = match repository.load().await {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(error) => {
                logger.warn(&format!("Could not load cart, starting empty: {}", error));
                Vec::new()
            }
        };

        Self {
            items: Mutex::new(items),
            repository,
            logger,
        }
    }

    /// Adds a wine to the cart.
    ///
    /// An existing line accumulates quantity (clamped to the per-item
    /// bound) and refreshes its timestamp. A new line is rejected with
    /// `false` when the cart already holds the maximum number of
    /// distinct items; nothing is mutated in that case.
    pub async fn add_item(&self, wine: &Wine, quantity: u32) -> bool {
        let mut items = self.items.lock().await;

        if let Some(existing) = items.iter_mut().find(|item| item.wine.id == wine.id) {
            existing.quantity = clamp_quantity(existing.quantity.saturating_add(quantity));
            existing.added_at = Utc::now();
        } else {
            if items.len() >= MAX_DISTINCT_ITEMS {
                self.logger
                    .info(&format!("Cart full, rejected item: {}", wine.id));
                return false;
            }
            items.push(CartItem::new(wine.clone(), quantity));
        }

        self.persist(&items).await;
        true
    }

    /// Removes a line. Removing an absent id is a no-op.
    pub async fn remove_item(&self, wine_id: &str) {
        let mut items = self.items.lock().await;
        let before = items.len();
        items.retain(|item| item.wine.id != wine_id);
        if items.len() != before {
            self.persist(&items).await;
        }
    }

    /// Sets a line's quantity exactly. A quantity of zero or less
    /// behaves as a removal; an absent id is a no-op.
    pub async fn update_quantity(&self, wine_id: &str, quantity: i32) {
        let mut items = self.items.lock().await;

        let Some(index) = items.iter().position(|item| item.wine.id == wine_id) else {
            return;
        };

        if quantity <= 0 {
            items.remove(index);
        } else {
            items[index].quantity = clamp_quantity(quantity as u32);
        }
        self.persist(&items).await;
    }

    /// Owned snapshot of the current lines, in insertion order.
    pub async fn get_items(&self) -> Vec<CartItem> {
        self.items.lock().await.clone()
    }

    /// Sum of quantities across all lines, not the distinct count.
    pub async fn item_count(&self) -> u32 {
        self.items
            .lock()
            .await
            .iter()
            .map(|item| item.quantity)
            .sum()
    }

    /// Total over the prices captured at add time.
    pub async fn total_price(&self) -> f64 {
        self.items
            .lock()
            .await
            .iter()
            .map(|item| item.line_total())
            .sum()
    }

    pub async fn is_in_cart(&self, wine_id: &str) -> bool {
        self.items
            .lock()
            .await
            .iter()
            .any(|item| item.wine.id == wine_id)
    }

    /// Quantity of a line, or zero for an absent id.
    pub async fn item_quantity(&self, wine_id: &str) -> u32 {
        self.items
            .lock()
            .await
            .iter()
            .find(|item| item.wine.id == wine_id)
            .map_or(0, |item| item.quantity)
    }

    pub async fn clear(&self) {
        let mut items = self.items.lock().await;
        items.clear();
        self.persist(&items).await;
    }

    /// Cart snapshot as pretty-printed JSON, for external processing.
    pub async fn export_data(&self) -> String {
        let items = self.items.lock().await;
        serde_json::to_string_pretty(&*items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replaces the cart with a previously exported snapshot. Returns
    /// `false` and leaves the cart untouched when the data is invalid.
    pub async fn import_data(&self, data: &str) -> bool {
        let Ok(imported) = serde_json::from_str::<Vec<CartItem>>(data) else {
            self.logger.warn("Rejected cart import: invalid payload");
            return false;
        };

        let mut items = self.items.lock().await;
        *items = imported;
        self.persist(&items).await;
        true
    }

    /// Builds a shop URL carrying the cart as a base64-encoded query
    /// parameter. An empty cart yields the base URL unchanged.
    pub async fn checkout_url(&self, base: &Url) -> Url {
        let items = self.items.lock().await;
        let mut url = base.clone();
        if items.is_empty() {
            return url;
        }

        let lines: Vec<CheckoutLine<'_>> = items
            .iter()
            .map(|item| CheckoutLine {
                id: &item.wine.id,
                name: &item.wine.product_name,
                price: item.wine.price,
                quantity: item.quantity,
                url: &item.wine.link,
            })
            .collect();
        let encoded = BASE64.encode(serde_json::to_vec(&lines).unwrap_or_default());

        url.query_pairs_mut().append_pair("sommelier_cart", &encoded);
        url
    }

    async fn persist(&self, items: &[CartItem]) {
        if let Err(error) = self.repository.save(items).await {
            self.logger
                .warn(&format!("Could not persist cart: {}", error));
        }
    }
}
