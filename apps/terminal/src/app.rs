//! # Application Controller
//!
//! Owns the session state and routes menu actions to domain operations.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Control Flow                             │
//! │                                                                         │
//! │  run()                                                                  │
//! │   └── login loop: pick role 1-3, or 4 to exit                           │
//! │        └── session(role): numbered menu loop until "Back"               │
//! │             └── dispatch(action):                                       │
//! │                  Insert/Delete/Restock/Sell ──► Inventory               │
//! │                  Sell success ──────────────► Receipt.add_item          │
//! │                  Export ────────────────────► Exporter                  │
//! │                                                                         │
//! │  Every domain error is printed and control returns to the menu loop;    │
//! │  nothing here is fatal except a closed input stream.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use aisle_core::validation::validate_stock_quantity;
use aisle_core::{Inventory, Product, Receipt};
use aisle_export::Exporter;

use crate::input;
use crate::menu::{self, MenuAction, Role};
use crate::screen;

/// The application controller.
///
/// Owns the Inventory and Receipt for the whole process lifetime and
/// lends them to whichever role menu is active. No other component
/// mutates them directly.
pub struct App {
    inventory: Inventory,
    receipt: Receipt,
    exporter: Exporter,
}

impl App {
    /// Creates a fresh session exporting into `export_dir`.
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        App {
            inventory: Inventory::new(),
            receipt: Receipt::new(),
            exporter: Exporter::new(export_dir.into()),
        }
    }

    /// Top-level login loop: role selection until exit.
    pub fn run(&mut self, input: &mut impl BufRead) -> io::Result<()> {
        loop {
            screen::clear();
            print!("{}", menu::render_login_menu());

            let choice = input::read_u32(input, "Enter choice: ")?;
            if choice == 4 {
                println!("Goodbye!");
                info!("session ended");
                return Ok(());
            }

            match Role::from_choice(choice) {
                Some(role) => {
                    info!(?role, "role selected");
                    self.session(role, input)?;
                }
                None => {
                    println!("Invalid choice.");
                    screen::pause(input)?;
                }
            }
        }
    }

    /// One role-menu session; returns on "Back".
    fn session(&mut self, role: Role, input: &mut impl BufRead) -> io::Result<()> {
        loop {
            screen::clear();
            print!("{}", menu::render_menu(role));

            let choice = input::read_u32(input, "Choice: ")?;
            match role.action_for_choice(choice) {
                Some(MenuAction::Back) => return Ok(()),
                Some(action) => {
                    screen::clear();
                    self.dispatch(action, input)?;
                    screen::pause(input)?;
                }
                None => {
                    println!("Invalid choice.");
                    screen::pause(input)?;
                }
            }
        }
    }

    /// Executes one menu action.
    fn dispatch(&mut self, action: MenuAction, input: &mut impl BufRead) -> io::Result<()> {
        match action {
            MenuAction::InsertProduct => self.insert_product(input),
            MenuAction::DeleteProduct => self.delete_product(input),
            MenuAction::Restock => self.restock_product(input),
            MenuAction::Sell => self.sell_product(input),
            MenuAction::ShowInventory => {
                self.show_inventory();
                Ok(())
            }
            MenuAction::ExportInventory => {
                self.export_inventory();
                Ok(())
            }
            MenuAction::ExportReceipt => {
                self.export_receipt();
                Ok(())
            }
            MenuAction::ClearReceipt => {
                self.clear_receipt();
                Ok(())
            }
            // Handled by the session loop before dispatch
            MenuAction::Back => Ok(()),
        }
    }

    // =========================================================================
    // Catalog Actions
    // =========================================================================

    fn insert_product(&mut self, input: &mut impl BufRead) -> io::Result<()> {
        println!("=== INSERT PRODUCT ===");
        let id = input::read_u32(input, "Enter product ID: ")?;
        let name = input::read_name(input, "Enter product name: ")?;
        let quantity = loop {
            let quantity = input::read_u32(input, "Enter quantity: ")?;
            match validate_stock_quantity(quantity) {
                Ok(()) => break quantity,
                Err(err) => println!("Invalid input: {err}."),
            }
        };
        let price = input::read_money(input, "Enter price: ")?;

        match self.inventory.insert(Product::new(id, name, quantity, price)) {
            Ok(()) => {
                debug!(id, "product inserted");
                println!("Product inserted successfully.");
            }
            Err(err) => println!("{err}."),
        }
        Ok(())
    }

    fn delete_product(&mut self, input: &mut impl BufRead) -> io::Result<()> {
        println!("=== DELETE PRODUCT ===");
        let id = input::read_u32(input, "Enter product ID to delete: ")?;

        match self.inventory.delete(id) {
            Ok(()) => {
                debug!(id, "product deleted");
                println!("Product deleted successfully.");
            }
            Err(err) => println!("{err}."),
        }
        Ok(())
    }

    fn restock_product(&mut self, input: &mut impl BufRead) -> io::Result<()> {
        println!("=== RESTOCK PRODUCT ===");
        let id = input::read_u32(input, "Enter product ID: ")?;
        let amount = input::read_u32(input, "Enter amount to restock: ")?;

        match self.inventory.restock(id, amount) {
            Ok(quantity) => {
                debug!(id, quantity, "product restocked");
                println!("Restocked successfully. Current quantity: {quantity}");
            }
            Err(err) => println!("{err}."),
        }
        Ok(())
    }

    fn sell_product(&mut self, input: &mut impl BufRead) -> io::Result<()> {
        println!("=== SELL PRODUCT ===");
        let id = input::read_u32(input, "Enter product ID: ")?;
        let amount = input::read_u32(input, "Enter quantity to sell: ")?;

        match self.inventory.sell(id, amount) {
            Ok(outcome) => {
                // Only a successful sale may produce a receipt line
                self.receipt.add_item(
                    outcome.taken.name.clone(),
                    outcome.taken.quantity,
                    outcome.taken.unit_price,
                );
                info!(id, amount, remaining = outcome.remaining, "sale completed");
                println!("Sale successful.");
                if let Some(warning) = outcome.warning {
                    warn!(id, %warning, "stock warning");
                    println!("Warning: '{}' is now {}.", outcome.taken.name, warning);
                }
            }
            Err(err) => println!("{err}."),
        }
        Ok(())
    }

    fn show_inventory(&self) {
        println!("\n=== INVENTORY STATUS ===");
        if self.inventory.is_empty() {
            println!("No products.");
            return;
        }
        for product in self.inventory.products() {
            println!("{product}");
        }
    }

    // =========================================================================
    // Export Actions
    // =========================================================================

    fn export_inventory(&self) {
        match self.exporter.export(&self.inventory) {
            Ok(path) => println!("Inventory exported to {}", path.display()),
            Err(err) => println!("{err}."),
        }
    }

    /// Exports the receipt.
    ///
    /// The receipt is NOT cleared afterwards: exporting twice before a
    /// clear re-exports the same accumulated totals. The operator ends a
    /// transaction explicitly with Clear Receipt.
    fn export_receipt(&self) {
        if self.receipt.is_empty() {
            println!("No items in receipt to export.");
            return;
        }
        match self.exporter.export(&self.receipt) {
            Ok(path) => println!("Receipt exported to {}", path.display()),
            Err(err) => println!("{err}."),
        }
    }

    fn clear_receipt(&mut self) {
        if self.receipt.is_empty() {
            println!("Receipt is already empty.");
            return;
        }
        self.receipt.clear();
        info!("receipt cleared");
        println!("Receipt cleared.");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
