//! Mock Catalog Client
//!
//! For testing and demo purposes. Serves a fixed in-memory product list.

use async_trait::async_trait;
use rust_decimal_macros::dec;

use super::CatalogClient;
use crate::error::{Result, StoreError};
use crate::product::{Product, Rating};

/// Mock catalog with static products
pub struct MockCatalogClient {
    products: Vec<Product>,
    /// Simulate a fetch failure (for testing error surfaces)
    fail: bool,
}

impl Default for MockCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogClient {
    pub fn new() -> Self {
        Self {
            products: demo_products(),
            fail: false,
        }
    }

    /// Create a client whose fetch always fails
    pub fn failing() -> Self {
        Self {
            products: Vec::new(),
            fail: true,
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            fail: false,
        }
    }
}

#[async_trait(?Send)]
impl CatalogClient for MockCatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        if self.fail {
            return Err(StoreError::Catalog("unexpected status 503".into()));
        }
        Ok(self.products.clone())
    }

    fn name(&self) -> &str {
        "MockCatalog"
    }
}

fn demo_products() -> Vec<Product> {
    let mut backpack = Product::new(1, "Fjallraven Foldsack Backpack", dec!(109.95));
    backpack.category = "men's clothing".into();
    backpack.rating = Rating {
        rate: 3.9,
        count: 120,
    };

    let mut shirt = Product::new(2, "Mens Casual Premium Slim Fit T-Shirt", dec!(22.30));
    shirt.category = "men's clothing".into();
    shirt.rating = Rating {
        rate: 4.1,
        count: 259,
    };

    let mut drive = Product::new(9, "WD 2TB Elements Portable External Hard Drive", dec!(64.00));
    drive.category = "electronics".into();
    drive.rating = Rating {
        rate: 3.3,
        count: 203,
    };

    vec![backpack, shirt, drive]
}
