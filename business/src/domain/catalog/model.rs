use serde::{Deserialize, Serialize};

/// A wine as delivered by the catalog feed.
///
/// The feed is an external export; field names follow its camelCase
/// convention. The core never mutates a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wine {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    pub image: String,
    pub price: f64,
    pub price_currency: String,
    pub original_price: f64,
    pub volume: String,
    pub price_per_liter: String,
    pub discount: String,
    pub link: String,
}

impl Wine {
    /// The feed encodes "no discount" as an empty string, "null" or "0".
    pub fn discount(&self) -> Option<&str> {
        match self.discount.trim() {
            "" | "null" | "0" => None,
            label => Some(label),
        }
    }
}

/// Envelope of a catalog feed export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WineCatalog {
    pub workflow_id: String,
    pub run_id: String,
    pub executed_at: String,
    pub data: Vec<Wine>,
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_wine(discount: &str) -> Wine {
        Wine {
            id: "w-1".to_string(),
            product_name: "Château Test Rouge".to_string(),
            image: "https://example.com/w-1.jpg".to_string(),
            price: 8.5,
            price_currency: "EUR".to_string(),
            original_price: 8.5,
            volume: "75cl".to_string(),
            price_per_liter: "€11.33/L".to_string(),
            discount: discount.to_string(),
            link: "https://example.com/wines/w-1".to_string(),
        }
    }

    #[test]
    fn should_treat_empty_discount_markers_as_none() {
        assert_eq!(sample_wine("").discount(), None);
        assert_eq!(sample_wine("null").discount(), None);
        assert_eq!(sample_wine("0").discount(), None);
        assert_eq!(sample_wine("  ").discount(), None);
    }

    #[test]
    fn should_expose_real_discount_label() {
        assert_eq!(sample_wine("-20%").discount(), Some("-20%"));
    }

    #[test]
    fn should_deserialize_feed_fields() {
        let raw = r#"{
            "_id": "abc123",
            "productName": "Sauvignon Blanc Reserve",
            "image": "https://example.com/abc.jpg",
            "price": 12.99,
            "priceCurrency": "EUR",
            "originalPrice": 14.99,
            "volume": "75cl",
            "pricePerLiter": "€17.32/L",
            "discount": "-13%",
            "link": "https://example.com/wines/abc123"
        }"#;

        let wine: Wine = serde_json::from_str(raw).unwrap();
        assert_eq!(wine.id, "abc123");
        assert_eq!(wine.product_name, "Sauvignon Blanc Reserve");
        assert_eq!(wine.price, 12.99);
        assert_eq!(wine.discount(), Some("-13%"));
    }

    #[test]
    fn should_deserialize_feed_envelope() {
        let raw = r#"{
            "workflowId": "wf-1",
            "runId": "run-9",
            "executedAt": "2025-06-01T10:00:00Z",
            "data": [],
            "totalCount": 0
        }"#;

        let catalog: WineCatalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.workflow_id, "wf-1");
        assert!(catalog.data.is_empty());
    }
}
