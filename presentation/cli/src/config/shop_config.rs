use url::Url;

const DEFAULT_SHOP_URL: &str = "https://www.example-wineshop.be/shop";

/// Where checkout links point to.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    pub base_url: Url,
}

impl ShopConfig {
    /// Load shop configuration from environment variables
    ///
    /// Environment variables:
    /// - SHOP_BASE_URL: base shop URL for checkout links (optional)
    pub fn from_env() -> Self {
        let raw = std::env::var("SHOP_BASE_URL").unwrap_or_else(|_| DEFAULT_SHOP_URL.to_string());
        let base_url = Url::parse(&raw).expect("SHOP_BASE_URL must be a valid URL");
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_default_shop_url() {
        let url = Url::parse(DEFAULT_SHOP_URL).unwrap();
        assert_eq!(url.scheme(), "https");
    }
}
