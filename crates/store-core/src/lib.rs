//! # store-core
//!
//! Catalog access and the in-memory shopping cart for the Neo Store
//! frontend.
//!
//! ## Shape of the system
//!
//! ```text
//! ┌──────────────┐    fetch_products()    ┌─────────────┐
//! │   Catalog    │───────────────────────▶│  Vec<Product>│
//! │   service    │       (one shot)       └──────┬──────┘
//! └──────────────┘                               │ add()
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    Cart     │──▶ total()
//!                                         └─────────────┘
//! ```
//!
//! The cart is a single-writer, insertion-ordered collection of lines,
//! unique by product id. Prices are snapshotted at first add and held as
//! [`rust_decimal::Decimal`] for the lifetime of the line. All mutating
//! operations absorb invalid input as no-ops rather than erroring.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod product;

pub use cart::{Cart, CartLine};
pub use catalog::{CatalogClient, HttpCatalogClient, MockCatalogClient};
pub use error::{Result, StoreError};
pub use product::{Product, Rating};
