//! # Product
//!
//! The product record held by the catalog.
//!
//! ## Identity
//! A product's `id` is its unique key and never changes after creation.
//! Only `quantity` is mutated in place (by restock/sell); `price` and
//! `name` are frozen at insert time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// A product on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier - immutable after creation.
    pub id: u32,

    /// Display name shown to the cashier and on exports.
    pub name: String,

    /// Current stock level, always within `[0, MAX_STOCK]` while the
    /// product is in a catalog.
    pub quantity: u32,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates a new product record.
    pub fn new(id: u32, name: impl Into<String>, quantity: u32, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Console rendering, one line per product:
/// `ID: 1 | Name: Milk | Qty: 50 | Price: $2.50`
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Qty: {} | Price: {}",
            self.id, self.name, self.quantity, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let product = Product::new(1, "Milk", 50, Money::from_cents(250));
        assert_eq!(
            product.to_string(),
            "ID: 1 | Name: Milk | Qty: 50 | Price: $2.50"
        );
    }
}
