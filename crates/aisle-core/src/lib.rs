//! # aisle-core: Pure Business Logic for Aisle
//!
//! This crate is the **heart** of Aisle, a console supermarket inventory
//! and sales tool. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Aisle Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal App (apps/terminal)                   │   │
//! │  │    Role Menus ──► Input Loop ──► Screen Rendering              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aisle-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   money   │  │ inventory │  │  receipt  │  │   │
//! │  │   │  Product  │  │   Money   │  │  catalog  │  │ line items│  │   │
//! │  │   │           │  │           │  │  + rules  │  │ + total   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO CONSOLE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 aisle-export (Export Layer)                     │   │
//! │  │          Snapshot rendering, timestamped file writes            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The product record and its console rendering
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - The catalog state machine (insert, delete, restock, sell)
//! - [`receipt`] - The sales accumulator
//! - [`error`] - Domain error types
//! - [`validation`] - Input-boundary validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: File system, clock, and console access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Failed operations never mutate**: a rejected insert/restock/sell leaves
//!    the catalog exactly as it was
//!
//! ## Example Usage
//!
//! ```rust
//! use aisle_core::{Inventory, Money, Product, Receipt, StockWarning};
//!
//! let mut inventory = Inventory::new();
//! let mut receipt = Receipt::new();
//!
//! inventory.insert(Product::new(1, "Milk", 50, Money::from_cents(250)))?;
//!
//! // Sell out the whole shelf
//! let outcome = inventory.sell(1, 50)?;
//! assert_eq!(outcome.warning, Some(StockWarning::Empty));
//!
//! receipt.add_item(outcome.taken.name, outcome.taken.quantity, outcome.taken.unit_price);
//! assert_eq!(receipt.total(), Money::from_cents(12_500)); // $125.00
//! # Ok::<(), aisle_core::InventoryError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod product;
pub mod receipt;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use aisle_core::Money` instead of
// `use aisle_core::money::Money`

pub use error::{InventoryError, ValidationError};
pub use inventory::{Inventory, SaleOutcome, SoldItem, StockWarning};
pub use money::Money;
pub use product::Product;
pub use receipt::{LineItem, Receipt};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum stock a single product may hold.
///
/// ## Why a constant?
/// The cap of 100 is a fixed business rule, not configuration. It is
/// enforced identically by `insert` and `restock` inside [`Inventory`]
/// so no caller can bypass it.
pub const MAX_STOCK: u32 = 100;

/// Stock strictly below this (but above zero) triggers a low-stock warning
/// after a sale.
pub const LOW_STOCK_THRESHOLD: u32 = 20;
