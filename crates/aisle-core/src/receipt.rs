//! # Receipt
//!
//! The sales accumulator: an ordered list of sold line items plus a
//! running total.
//!
//! ## Invariant
//! `total` is always exactly the sum of `quantity × unit_price` over all
//! recorded items. It is maintained incrementally on every
//! [`Receipt::add_item`] call, never recomputed on display.
//!
//! ## Lifecycle
//! ```text
//! new() ──► add_item()* ──► export ──► clear() ──► (empty again)
//!                             │
//!                             └── NOT automatic: repeated exports before
//!                                 clear() re-export the same accumulated
//!                                 totals. The caller decides when a
//!                                 transaction ends.
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One recorded sale event.
///
/// Values are frozen at time of sale - the receipt does not look back
/// at the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name at time of sale.
    pub name: String,
    /// Quantity sold.
    pub quantity: u32,
    /// Unit price at time of sale.
    pub unit_price: Money,
}

impl LineItem {
    /// Line total (`quantity × unit_price`).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity as i64)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The running receipt for the current session.
///
/// ## Trust Boundary
/// No validation happens here: `Inventory::sell` is the sole trusted
/// producer of line items, and it only emits them for sales that
/// actually happened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Receipt {
    items: Vec<LineItem>,
    total: Money,
}

impl Receipt {
    /// Creates an empty receipt.
    pub fn new() -> Self {
        Receipt {
            items: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Appends a line item and bumps the running total.
    ///
    /// Insertion order is sale order; the export renders items in the
    /// order they were added.
    pub fn add_item(&mut self, name: impl Into<String>, quantity: u32, unit_price: Money) {
        let item = LineItem {
            name: name.into(),
            quantity,
            unit_price,
        };
        self.total += item.line_total();
        self.items.push(item);
    }

    /// Checks if the receipt has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resets to the empty state: no items, total zero.
    ///
    /// Called by the menu layer after a receipt has been exported so
    /// future sales start a fresh transaction.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::zero();
    }

    /// The recorded line items, in sale order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The running total.
    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_accumulates_incrementally() {
        let mut receipt = Receipt::new();
        assert!(receipt.is_empty());
        assert_eq!(receipt.total(), Money::zero());

        receipt.add_item("Milk", 50, Money::from_cents(250));
        assert_eq!(receipt.total(), Money::from_cents(12_500)); // $125.00

        receipt.add_item("Bread", 2, Money::from_cents(199));
        assert_eq!(receipt.total(), Money::from_cents(12_898));

        assert_eq!(receipt.items().len(), 2);
    }

    #[test]
    fn test_items_keep_sale_order() {
        let mut receipt = Receipt::new();
        receipt.add_item("Bread", 1, Money::from_cents(199));
        receipt.add_item("Milk", 1, Money::from_cents(250));

        let names: Vec<&str> = receipt.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Milk"]);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut receipt = Receipt::new();
        receipt.add_item("Milk", 50, Money::from_cents(250));
        assert!(!receipt.is_empty());

        receipt.clear();
        assert!(receipt.is_empty());
        assert_eq!(receipt.total(), Money::zero());
        assert!(receipt.items().is_empty());
    }

    #[test]
    fn test_line_total() {
        let item = LineItem {
            name: "Milk".to_string(),
            quantity: 50,
            unit_price: Money::from_cents(250),
        };
        assert_eq!(item.line_total(), Money::from_cents(12_500));
    }
}

// =============================================================================
// Property Tests
// =============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The running total always equals the exact sum of
        /// quantity × unit_price over all recorded items.
        #[test]
        fn total_equals_sum_of_line_totals(
            items in prop::collection::vec((1u32..1000, 1i64..100_000), 0..32)
        ) {
            let mut receipt = Receipt::new();
            for (quantity, price_cents) in &items {
                receipt.add_item("item", *quantity, Money::from_cents(*price_cents));
            }

            let expected: i64 = items
                .iter()
                .map(|(quantity, price_cents)| *quantity as i64 * price_cents)
                .sum();
            prop_assert_eq!(receipt.total().cents(), expected);

            receipt.clear();
            prop_assert_eq!(receipt.total(), Money::zero());
            prop_assert!(receipt.is_empty());
        }
    }
}
