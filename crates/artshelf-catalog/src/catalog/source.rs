//! Catalog sources.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::catalog::Product;
use crate::error::CatalogError;

/// Default remote catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://6545921dfe036a2fa954718f.mockapi.io/api/v1/artTools";

/// Supplier of the full, ordered product list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product, in the source's order.
    ///
    /// Transport failures are reported as [`CatalogError::Network`]. Nothing
    /// is retried here.
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Decode a JSON array of products, dropping records that fail validation.
///
/// A body that is not an array at all is a [`CatalogError::Network`]: the
/// remote end answered with something other than a catalog.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, CatalogError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| CatalogError::Network(format!("malformed catalog body: {}", e)))?;

    let total = records.len();
    let mut products = Vec::with_capacity(total);
    for (index, record) in records.into_iter().enumerate() {
        let product = match serde_json::from_value::<Product>(record) {
            Ok(product) => product,
            Err(e) => {
                warn!(index, error = %e, "dropping undecodable catalog record");
                continue;
            }
        };
        if let Err(e) = product.validate() {
            warn!(index, error = %e, "dropping invalid catalog record");
            continue;
        }
        products.push(product);
    }

    if products.len() < total {
        warn!(kept = products.len(), total, "catalog had rejected records");
    }
    Ok(products)
}

/// Catalog fetched over HTTP with a single `GET`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpCatalogSource {
    /// Create a source for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: std::time::Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("artshelf/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// The endpoint this source reads.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!(
                "HTTP {} from {}",
                status, self.url
            )));
        }

        let body = response.text().await?;
        let products = parse_catalog(&body)?;
        info!(url = %self.url, count = products.len(), "catalog fetched");
        Ok(products)
    }
}

/// Catalog held in memory (fixtures, tests, offline demos).
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    /// Serve the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Serve the products in a JSON array.
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(parse_catalog(body)?))
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let body = r#"[
            {"id": "2", "artName": "B", "brand": "X", "price": 2},
            {"id": "1", "artName": "A", "brand": "Y", "price": 1}
        ]"#;
        let products = parse_catalog(body).unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_parse_drops_bad_records() {
        let body = r#"[
            {"id": "1", "artName": "A", "brand": "X", "price": 1},
            {"id": "2", "artName": "B", "brand": "X", "price": 1, "limitedTimeDeal": 1.5},
            {"id": "3", "brand": "X"}
        ]"#;
        let products = parse_catalog(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "1");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_catalog(r#"{"error": "rate limited"}"#);
        assert!(matches!(result, Err(CatalogError::Network(_))));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticCatalogSource::new(vec![Product::new("1", "Pen", "A", 1.0)]);
        let products = source.fetch_catalog().await.unwrap();
        assert_eq!(products.len(), 1);
    }
}
