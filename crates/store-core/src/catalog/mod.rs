//! Catalog Integration
//!
//! Abstraction and implementations for the external product catalog.

mod mock;

pub use mock::MockCatalogClient;

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::product::Product;

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Catalog client trait (Strategy pattern)
///
/// One implementation per catalog backend. Fetching is a single shot per
/// page view: on success the returned list replaces any prior list, on
/// failure the caller keeps no partial data and performs no retry.
///
/// Browser-backed callers hold JS handles, which are not `Send`, so the
/// trait does not require `Send` futures.
#[async_trait(?Send)]
pub trait CatalogClient {
    /// Fetch the full product list
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Catalog name
    fn name(&self) -> &str;
}

/// Catalog client over HTTPS
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for HttpCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpCatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_CATALOG_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let response = self.client.get(&self.base_url).send().await?;

        if !response.status().is_success() {
            tracing::warn!("Catalog fetch failed: HTTP {}", response.status());
            return Err(StoreError::Catalog(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let products: Vec<Product> = response.json().await?;
        tracing::info!("Fetched {} products from {}", products.len(), self.base_url);

        Ok(products)
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}
