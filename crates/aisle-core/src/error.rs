//! # Error Types
//!
//! Domain-specific error types for aisle-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aisle-core errors (this file)                                          │
//! │  ├── InventoryError   - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  aisle-export errors (separate crate)                                   │
//! │  └── ExportError      - File write failures                             │
//! │                                                                         │
//! │  Flow: ValidationError → InventoryError → menu loop → user message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, available stock, etc.)
//! 3. Errors are enum variants, never String
//! 4. No error here is fatal: the menu loop reports and continues

use thiserror::Error;

// =============================================================================
// Inventory Error
// =============================================================================

/// Business rule violations raised by [`crate::Inventory`].
///
/// Every fallible catalog operation returns one of these instead of
/// mutating state. The caller must check the outcome before proceeding
/// (a failed sale must never produce a receipt line item).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// A product with this id is already in the catalog.
    ///
    /// ## When This Occurs
    /// - Inserting a product whose id is taken
    /// - The existing entry is left completely untouched
    #[error("Product {id} already exists")]
    AlreadyExists { id: u32 },

    /// No product with this id is in the catalog.
    #[error("Product {id} not found")]
    NotFound { id: u32 },

    /// The operation would push stock past the shelf cap.
    ///
    /// ## When This Occurs
    /// - Inserting a product with quantity above [`crate::MAX_STOCK`]
    /// - Restocking such that `current + amount` exceeds the cap
    #[error("Quantity {requested} exceeds maximum stock of {max}")]
    QuantityExceeded { requested: u32, max: u32 },

    /// Not enough stock to complete the sale.
    ///
    /// ## User Workflow
    /// ```text
    /// Sell (id: 1, qty: 60)
    ///      │
    ///      ▼
    /// Check stock: available=50
    ///      │
    ///      ▼
    /// InsufficientStock { id: 1, available: 50, requested: 60 }
    ///      │
    ///      ▼
    /// Menu shows: "Insufficient stock for product 1: available 50, requested 60"
    /// ```
    #[error("Insufficient stock for product {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: u32,
        available: u32,
        requested: u32,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user-supplied values do not meet requirements.
/// Used for early validation at the input boundary, before business
/// logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with InventoryError.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================
