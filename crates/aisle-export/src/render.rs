//! # Snapshot Rendering
//!
//! The `Exportable` contract and its implementations for the two
//! printable entities, Inventory and Receipt.
//!
//! ## File Formats
//! ```text
//! inventory_<ts>.txt                      receipt_<ts>.txt
//! ─────────────────────                   ─────────────────────
//! === INVENTORY EXPORT ===                ===== RECEIPT =====
//! Timestamp: 20260829_143015              Timestamp: 20260829_143015
//!                                         -------------------
//! 1 Milk 50 2.50                          Milk x50 @ $2.50 = $125.00
//! 2 Bread 30 1.99                         -------------------
//! ...                                     Total: $125.00
//!                                         ===================
//! ```
//!
//! The inventory body is machine-parsable: one product per line,
//! space-separated `id name quantity price`, ascending id, price as a
//! plain decimal without a currency sign.

use std::fmt::Write as _;

use aisle_core::{Inventory, Receipt};

// =============================================================================
// Exportable Contract
// =============================================================================

/// A printable entity: renders its current state as structured text.
///
/// The timestamp is passed in rather than read here, so rendering stays
/// deterministic and testable; [`crate::Exporter`] reads the clock once
/// and uses the same value for the header and the file name.
pub trait Exportable {
    /// File name prefix: `<prefix>_<timestamp>.txt`.
    fn file_prefix(&self) -> &'static str;

    /// Renders the full file content for this snapshot.
    fn export_content(&self, timestamp: &str) -> String;
}

// =============================================================================
// Inventory
// =============================================================================

impl Exportable for Inventory {
    fn file_prefix(&self) -> &'static str {
        "inventory"
    }

    fn export_content(&self, timestamp: &str) -> String {
        let mut content = String::new();
        content.push_str("=== INVENTORY EXPORT ===\n");
        let _ = writeln!(content, "Timestamp: {timestamp}");
        content.push('\n');
        for product in self.products() {
            let _ = writeln!(
                content,
                "{} {} {} {}",
                product.id,
                product.name,
                product.quantity,
                product.price.plain()
            );
        }
        content
    }
}

// =============================================================================
// Receipt
// =============================================================================

impl Exportable for Receipt {
    fn file_prefix(&self) -> &'static str {
        "receipt"
    }

    fn export_content(&self, timestamp: &str) -> String {
        let mut content = String::new();
        content.push_str("===== RECEIPT =====\n");
        let _ = writeln!(content, "Timestamp: {timestamp}");
        content.push_str("-------------------\n");
        for item in self.items() {
            let _ = writeln!(
                content,
                "{} x{} @ {} = {}",
                item.name,
                item.quantity,
                item.unit_price,
                item.line_total()
            );
        }
        content.push_str("-------------------\n");
        let _ = writeln!(content, "Total: {}", self.total());
        content.push_str("===================\n");
        content
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aisle_core::{Money, Product};

    #[test]
    fn test_inventory_content_format() {
        let mut inventory = Inventory::new();
        inventory
            .insert(Product::new(2, "Bread", 30, Money::from_cents(199)))
            .unwrap();
        inventory
            .insert(Product::new(1, "Milk", 50, Money::from_cents(250)))
            .unwrap();

        let content = inventory.export_content("20260829_143015");
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "=== INVENTORY EXPORT ===");
        assert_eq!(lines[1], "Timestamp: 20260829_143015");
        assert_eq!(lines[2], "");
        // Ascending id, regardless of insertion order
        assert_eq!(lines[3], "1 Milk 50 2.50");
        assert_eq!(lines[4], "2 Bread 30 1.99");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_empty_inventory_content() {
        let inventory = Inventory::new();
        let content = inventory.export_content("20260829_143015");
        assert_eq!(
            content,
            "=== INVENTORY EXPORT ===\nTimestamp: 20260829_143015\n\n"
        );
    }

    #[test]
    fn test_receipt_content_format() {
        let mut receipt = Receipt::new();
        receipt.add_item("Milk", 50, Money::from_cents(250));
        receipt.add_item("Bread", 2, Money::from_cents(199));

        let content = receipt.export_content("20260829_143015");
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "===== RECEIPT =====");
        assert_eq!(lines[1], "Timestamp: 20260829_143015");
        assert_eq!(lines[2], "-------------------");
        assert_eq!(lines[3], "Milk x50 @ $2.50 = $125.00");
        assert_eq!(lines[4], "Bread x2 @ $1.99 = $3.98");
        assert_eq!(lines[5], "-------------------");
        assert_eq!(lines[6], "Total: $128.98");
        assert_eq!(lines[7], "===================");
    }

    #[test]
    fn test_file_prefixes() {
        assert_eq!(Inventory::new().file_prefix(), "inventory");
        assert_eq!(Receipt::new().file_prefix(), "receipt");
    }
}
