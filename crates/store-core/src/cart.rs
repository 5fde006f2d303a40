//! Shopping Cart
//!
//! In-memory, insertion-ordered collection of cart lines, unique by
//! product id. There is exactly one writer context (the view's event
//! handlers), so every operation is synchronous and atomic with respect
//! to the collection.
//!
//! None of the operations fail: invalid input degrades to a no-op, never
//! to an inconsistent state. Quantities stay `>= 1` for as long as a line
//! exists; removal is always explicit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// One entry in the cart: a product snapshot and a quantity
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id this line was created from
    pub id: u64,

    /// Display name, snapshotted at first add
    pub name: String,

    /// Unit price, snapshotted at first add and never re-fetched
    pub price: Decimal,

    /// Quantity, always >= 1
    pub quantity: u32,

    /// Image URL, snapshotted at first add
    pub image: String,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.title.clone(),
            price: product.price,
            quantity: 1,
            image: product.image.clone(),
        }
    }

    /// Line subtotal (unit price × quantity)
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The cart: at most one line per product id, insertion order preserved
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line for this product already exists, its quantity is
    /// incremented by one; the stored price is NOT re-snapshotted.
    /// Otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from_product(product));
        }
    }

    /// Replace a line's quantity.
    ///
    /// No-op when `quantity < 1` (a decrement below one must not delete
    /// the line; removal goes through [`Cart::remove`] explicitly) and
    /// when no line with `id` exists.
    pub fn update_quantity(&mut self, id: u64, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line with the given id, if present
    pub fn remove(&mut self, id: u64) {
        self.lines.retain(|l| l.id != id);
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Cart total, recomputed on every read.
    ///
    /// Zero for an empty cart.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (the cart badge count)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: u64, price: Decimal) -> Product {
        Product::new(id, format!("Product {id}"), price)
    }

    #[test]
    fn test_add_distinct_products() {
        let mut cart = Cart::new();
        cart.add(&product(1, dec!(10.00)));
        cart.add(&product(2, dec!(5.50)));
        cart.add(&product(2, dec!(5.50)));
        cart.add(&product(1, dec!(10.00)));
        cart.add(&product(1, dec!(10.00)));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].id, 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines()[1].id, 2);
        assert_eq!(cart.lines()[1].quantity, 2);
    }

    #[test]
    fn test_add_never_resnapshots_price() {
        let mut cart = Cart::new();
        cart.add(&product(1, dec!(10.00)));

        // Same id, different catalog price; only quantity changes.
        cart.add(&product(1, dec!(99.99)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].price, dec!(10.00));
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_below_one_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, dec!(10.00)));
        cart.update_quantity(1, 3);
        assert_eq!(cart.lines()[0].quantity, 3);

        cart.update_quantity(1, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, dec!(10.00)));
        cart.update_quantity(42, 5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(&product(1, dec!(10.00)));
        cart.add(&product(2, dec!(5.50)));

        // Absent id leaves the cart unchanged.
        cart.remove(42);
        assert_eq!(cart.len(), 2);

        cart.remove(1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id, 2);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);

        cart.add(&product(1, dec!(10.00)));
        cart.add(&product(2, dec!(5.50)));
        cart.add(&product(2, dec!(5.50)));
        assert_eq!(cart.total(), dec!(21.00));

        cart.remove(1);
        assert_eq!(cart.total(), dec!(11.00));

        cart.clear();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.is_empty());
    }
}
