//! # Inventory
//!
//! The catalog state machine: owns the product map, executes the
//! transactional operations, and enforces the stock rules.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Operations                                │
//! │                                                                         │
//! │  Menu Action             Operation               Catalog Change         │
//! │  ───────────             ─────────               ──────────────         │
//! │                                                                         │
//! │  Insert Product ───────► insert(product) ──────► entry added            │
//! │                                                                         │
//! │  Delete Product ───────► delete(id) ───────────► entry removed          │
//! │                                                                         │
//! │  Restock ──────────────► restock(id, amount) ──► quantity += amount     │
//! │                                                                         │
//! │  Sell ─────────────────► sell(id, amount) ─────► quantity -= amount     │
//! │                               │                                         │
//! │                               └──► SaleOutcome { taken, warning }       │
//! │                                                                         │
//! │  Show/Export ──────────► snapshot() ───────────► (read only)            │
//! │                                                                         │
//! │  NOTE: A rejected operation never mutates the catalog.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two entries share an id (`BTreeMap` key).
//! - `0 <= quantity <= MAX_STOCK` for every entry at all times.
//! - Iteration order is ascending id, so display and export are
//!   deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::money::Money;
use crate::product::Product;
use crate::{LOW_STOCK_THRESHOLD, MAX_STOCK};

// =============================================================================
// Stock Warning
// =============================================================================

/// Informational classification of a product's post-sale stock level.
///
/// ## Tier Partition
/// Evaluated in this order on the quantity *remaining after* a sale;
/// the tiers are mutually exclusive:
///
/// | remaining    | warning    |
/// |--------------|------------|
/// | `== 0`       | `Empty`    |
/// | `(0, 20)`    | `Low`      |
/// | `== 100`     | `Full`     |
/// | otherwise    | none       |
///
/// Warnings never block a sale - they are advice for the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockWarning {
    /// Stock hit zero; the shelf is empty.
    Empty,
    /// Stock is above zero but below the low-stock threshold.
    Low,
    /// The shelf is at maximum capacity.
    Full,
}

impl StockWarning {
    /// Classifies a stock level into a warning tier, if any.
    pub fn classify(remaining: u32) -> Option<StockWarning> {
        if remaining == 0 {
            Some(StockWarning::Empty)
        } else if remaining < LOW_STOCK_THRESHOLD {
            Some(StockWarning::Low)
        } else if remaining == MAX_STOCK {
            Some(StockWarning::Full)
        } else {
            None
        }
    }
}

impl fmt::Display for StockWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StockWarning::Empty => "empty",
            StockWarning::Low => "low stock",
            StockWarning::Full => "full",
        };
        f.write_str(text)
    }
}

// =============================================================================
// Sale Outcome
// =============================================================================

/// A frozen record of exactly what was sold.
///
/// ## Snapshot Pattern
/// The sold item is decoupled from the catalog entry: `quantity` is the
/// amount taken (not the remaining stock) and `name`/`unit_price` are
/// copies made at the moment of sale. Later catalog changes do not
/// affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldItem {
    /// Product name at time of sale (frozen).
    pub name: String,
    /// Quantity taken in this sale.
    pub quantity: u32,
    /// Unit price at time of sale (frozen).
    pub unit_price: Money,
}

/// The result of a successful sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleOutcome {
    /// What was taken off the shelf.
    pub taken: SoldItem,
    /// Stock remaining after the sale.
    pub remaining: u32,
    /// Post-sale stock tier warning, if the remaining level crossed one.
    pub warning: Option<StockWarning>,
}

// =============================================================================
// Inventory
// =============================================================================

/// The product catalog and its rules engine.
///
/// ## Why BTreeMap?
/// Keys are unique product ids and iteration is ascending by id, which
/// gives the deterministic ordering that display and export rely on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    products: BTreeMap<u32, Product>,
}

impl Inventory {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Inventory {
            products: BTreeMap::new(),
        }
    }

    /// Adds a new product to the catalog.
    ///
    /// ## Errors
    /// - [`InventoryError::AlreadyExists`] if the id is taken; the
    ///   existing entry is left untouched
    /// - [`InventoryError::QuantityExceeded`] if the initial quantity is
    ///   above [`MAX_STOCK`]
    pub fn insert(&mut self, product: Product) -> InventoryResult<()> {
        if self.products.contains_key(&product.id) {
            return Err(InventoryError::AlreadyExists { id: product.id });
        }
        if product.quantity > MAX_STOCK {
            return Err(InventoryError::QuantityExceeded {
                requested: product.quantity,
                max: MAX_STOCK,
            });
        }
        self.products.insert(product.id, product);
        Ok(())
    }

    /// Removes a product from the catalog.
    ///
    /// ## Errors
    /// - [`InventoryError::NotFound`] if no product has this id
    pub fn delete(&mut self, id: u32) -> InventoryResult<()> {
        match self.products.remove(&id) {
            Some(_) => Ok(()),
            None => Err(InventoryError::NotFound { id }),
        }
    }

    /// Increases a product's stock, returning the new quantity.
    ///
    /// The amount is `u32`, so a negative restock (which would bypass
    /// the sale bookkeeping) is unrepresentable.
    ///
    /// ## Errors
    /// - [`InventoryError::NotFound`] if no product has this id
    /// - [`InventoryError::QuantityExceeded`] if `current + amount`
    ///   would exceed [`MAX_STOCK`]; the stored quantity is unchanged
    pub fn restock(&mut self, id: u32, amount: u32) -> InventoryResult<u32> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(InventoryError::NotFound { id })?;

        // Saturating: an absurd amount still reports over-cap instead of
        // overflowing
        let requested = product.quantity.saturating_add(amount);
        if requested > MAX_STOCK {
            return Err(InventoryError::QuantityExceeded {
                requested,
                max: MAX_STOCK,
            });
        }
        product.quantity = requested;
        Ok(product.quantity)
    }

    /// Sells `amount` units of a product.
    ///
    /// On success the stock is decremented and a [`SaleOutcome`] is
    /// returned: a frozen [`SoldItem`] describing exactly what was
    /// taken, the remaining stock, and the post-sale warning tier.
    ///
    /// ## User Workflow
    /// ```text
    /// Sell (id: 1, qty: 50) on stock 50
    ///      │
    ///      ▼
    /// quantity: 50 → 0
    ///      │
    ///      ▼
    /// SaleOutcome {
    ///     taken: Milk x50 @ $2.50,
    ///     remaining: 0,
    ///     warning: Some(Empty),   ← shelf needs refilling
    /// }
    /// ```
    ///
    /// ## Errors
    /// - [`InventoryError::NotFound`] if no product has this id
    /// - [`InventoryError::InsufficientStock`] if `current < amount`;
    ///   stock is left unchanged and no receipt line must be produced
    pub fn sell(&mut self, id: u32, amount: u32) -> InventoryResult<SaleOutcome> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(InventoryError::NotFound { id })?;

        if product.quantity < amount {
            return Err(InventoryError::InsufficientStock {
                id,
                available: product.quantity,
                requested: amount,
            });
        }

        product.quantity -= amount;

        Ok(SaleOutcome {
            taken: SoldItem {
                name: product.name.clone(),
                quantity: amount,
                unit_price: product.price,
            },
            remaining: product.quantity,
            warning: StockWarning::classify(product.quantity),
        })
    }

    /// Membership query, no side effect.
    pub fn exists(&self, id: u32) -> bool {
        self.products.contains_key(&id)
    }

    /// Read-only view of the catalog, ordered by ascending id.
    ///
    /// This is the render input for display and export; headers and
    /// timestamps are layered on by the export crate.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Iterates products in ascending-id order without cloning.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    /// One random catalog operation.
    #[derive(Debug, Clone)]
    enum Op {
        Insert { id: u32, quantity: u32 },
        Delete { id: u32 },
        Restock { id: u32, amount: u32 },
        Sell { id: u32, amount: u32 },
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..8, 0u32..150).prop_map(|(id, quantity)| Op::Insert { id, quantity }),
            (0u32..8).prop_map(|id| Op::Delete { id }),
            (0u32..8, 0u32..150).prop_map(|(id, amount)| Op::Restock { id, amount }),
            (0u32..8, 0u32..150).prop_map(|(id, amount)| Op::Sell { id, amount }),
        ]
    }

    proptest! {
        /// Under any operation sequence, every stored quantity stays
        /// within [0, MAX_STOCK].
        #[test]
        fn quantity_always_within_bounds(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut inv = Inventory::new();
            for op in ops {
                // Outcomes are irrelevant here; only the invariant matters.
                let _ = match op {
                    Op::Insert { id, quantity } => inv
                        .insert(Product::new(id, format!("P{id}"), quantity, Money::from_cents(100)))
                        .map(|_| ()),
                    Op::Delete { id } => inv.delete(id),
                    Op::Restock { id, amount } => inv.restock(id, amount).map(|_| ()),
                    Op::Sell { id, amount } => inv.sell(id, amount).map(|_| ()),
                };
                for product in inv.products() {
                    prop_assert!(product.quantity <= MAX_STOCK);
                }
            }
        }

        /// A successful sale of `amount` from stock `q` leaves exactly
        /// `q - amount`, and the sold item snapshot carries the original
        /// name and price.
        #[test]
        fn sell_accounting_is_exact(stock in 0u32..=100, amount in 0u32..150) {
            let mut inv = Inventory::new();
            inv.insert(Product::new(1, "Milk", stock, Money::from_cents(250))).unwrap();

            match inv.sell(1, amount) {
                Ok(outcome) => {
                    prop_assert!(amount <= stock);
                    prop_assert_eq!(outcome.remaining, stock - amount);
                    prop_assert_eq!(outcome.taken.quantity, amount);
                    prop_assert_eq!(outcome.taken.name.as_str(), "Milk");
                    prop_assert_eq!(outcome.taken.unit_price, Money::from_cents(250));
                }
                Err(_) => {
                    prop_assert!(amount > stock);
                    prop_assert_eq!(inv.snapshot()[0].quantity, stock);
                }
            }
        }
    }
}
