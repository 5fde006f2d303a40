//! Product Models
//!
//! Read-only records sourced from the external catalog service. Products
//! are immutable for the duration of a page view and never mutated locally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (unique, assigned by the catalog service)
    pub id: u64,

    /// Display name
    pub title: String,

    /// Unit price (display currency, non-negative)
    pub price: Decimal,

    /// Descriptive text
    pub description: String,

    /// Category tag
    pub category: String,

    /// Image URL
    pub image: String,

    /// Aggregate customer rating
    pub rating: Rating,
}

/// Aggregate rating for a product
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score
    pub rate: f64,

    /// Number of reviews
    pub count: u64,
}

impl Product {
    pub fn new(id: u64, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_catalog_record() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15in laptops",
            "category": "men's clothing",
            "image": "https://example.com/backpack.png",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, dec!(109.95));
        assert_eq!(product.rating.count, 120);
    }
}
