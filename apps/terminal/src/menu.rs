//! # Roles and Menus
//!
//! The closed set of user roles and the fixed operation tables each one
//! exposes.
//!
//! ## Role-Based Access
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Role Capability Matrix                           │
//! │                                                                         │
//! │                      Admin   InventoryManager   Cashier                 │
//! │  Insert Product        ✔            ✔                                   │
//! │  Delete Product        ✔            ✔                                   │
//! │  Restock               ✔            ✔                                   │
//! │  Sell                  ✔                            ✔                   │
//! │  Show Inventory        ✔            ✔               ✔                   │
//! │  Export Inventory      ✔            ✔                                   │
//! │  Export Receipt        ✔                            ✔                   │
//! │  Clear Receipt         ✔                            ✔                   │
//! │                                                                         │
//! │  Roles are menu choices, not credentials - there is no authentication.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dispatch is a match over the action tag; the set of roles is known at
//! compile time, so no dynamic dispatch is needed.

use std::fmt::Write as _;

// =============================================================================
// Menu Action
// =============================================================================

/// One operation a menu can offer, drawn from the Inventory/Receipt
/// contracts. `Back` leaves the role session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    InsertProduct,
    DeleteProduct,
    Restock,
    Sell,
    ShowInventory,
    ExportInventory,
    ExportReceipt,
    ClearReceipt,
    Back,
}

impl MenuAction {
    /// Label shown in the numbered menu.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::InsertProduct => "Insert Product",
            MenuAction::DeleteProduct => "Delete Product",
            MenuAction::Restock => "Restock",
            MenuAction::Sell => "Sell",
            MenuAction::ShowInventory => "Show Inventory",
            MenuAction::ExportInventory => "Export Inventory",
            MenuAction::ExportReceipt => "Export Receipt",
            MenuAction::ClearReceipt => "Clear Receipt",
            MenuAction::Back => "Back",
        }
    }
}

// =============================================================================
// Role
// =============================================================================

/// The closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    InventoryManager,
    Cashier,
}

impl Role {
    /// Top-level selection order (1-based in the login menu).
    pub const ALL: [Role; 3] = [Role::Admin, Role::InventoryManager, Role::Cashier];

    /// Menu heading for this role.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN MENU",
            Role::InventoryManager => "INVENTORY MANAGER MENU",
            Role::Cashier => "CASHIER MENU",
        }
    }

    /// The fixed list of operations this role may perform.
    ///
    /// `Back` is always the last entry, so its menu number is stable for
    /// a given role.
    pub fn actions(&self) -> &'static [MenuAction] {
        match self {
            Role::Admin => &[
                MenuAction::InsertProduct,
                MenuAction::DeleteProduct,
                MenuAction::Restock,
                MenuAction::Sell,
                MenuAction::ShowInventory,
                MenuAction::ExportInventory,
                MenuAction::ExportReceipt,
                MenuAction::ClearReceipt,
                MenuAction::Back,
            ],
            Role::InventoryManager => &[
                MenuAction::InsertProduct,
                MenuAction::DeleteProduct,
                MenuAction::Restock,
                MenuAction::ShowInventory,
                MenuAction::ExportInventory,
                MenuAction::Back,
            ],
            Role::Cashier => &[
                MenuAction::Sell,
                MenuAction::ShowInventory,
                MenuAction::ExportReceipt,
                MenuAction::ClearReceipt,
                MenuAction::Back,
            ],
        }
    }

    /// Maps a 1-based menu choice to an action, if in range.
    pub fn action_for_choice(&self, choice: u32) -> Option<MenuAction> {
        let actions = self.actions();
        if choice == 0 || choice as usize > actions.len() {
            return None;
        }
        Some(actions[choice as usize - 1])
    }

    /// Maps a 1-based login-menu choice to a role, if in range.
    /// (Choice 4, exit, is handled by the caller.)
    pub fn from_choice(choice: u32) -> Option<Role> {
        match choice {
            1 => Some(Role::Admin),
            2 => Some(Role::InventoryManager),
            3 => Some(Role::Cashier),
            _ => None,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a role's numbered menu.
pub fn render_menu(role: Role) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {} ===", role.title());
    for (index, action) in role.actions().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, action.label());
    }
    out
}

/// Renders the top-level login menu.
pub fn render_login_menu() -> String {
    let mut out = String::new();
    out.push_str("==============================\n");
    out.push_str("   SUPERMARKET LOGIN MENU\n");
    out.push_str("==============================\n");
    out.push_str("1. Admin\n");
    out.push_str("2. Inventory Manager\n");
    out.push_str("3. Cashier\n");
    out.push_str("4. Exit\n");
    out.push_str("------------------------------\n");
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_ends_with_back() {
        for role in Role::ALL {
            assert_eq!(role.actions().last(), Some(&MenuAction::Back));
        }
    }

    #[test]
    fn test_admin_has_full_access() {
        let actions = Role::Admin.actions();
        for action in [
            MenuAction::InsertProduct,
            MenuAction::DeleteProduct,
            MenuAction::Restock,
            MenuAction::Sell,
            MenuAction::ShowInventory,
            MenuAction::ExportInventory,
            MenuAction::ExportReceipt,
            MenuAction::ClearReceipt,
        ] {
            assert!(actions.contains(&action), "admin missing {action:?}");
        }
    }

    #[test]
    fn test_inventory_manager_cannot_sell() {
        let actions = Role::InventoryManager.actions();
        assert!(!actions.contains(&MenuAction::Sell));
        assert!(!actions.contains(&MenuAction::ExportReceipt));
        assert!(actions.contains(&MenuAction::Restock));
    }

    #[test]
    fn test_cashier_cannot_touch_catalog() {
        let actions = Role::Cashier.actions();
        assert!(!actions.contains(&MenuAction::InsertProduct));
        assert!(!actions.contains(&MenuAction::DeleteProduct));
        assert!(!actions.contains(&MenuAction::Restock));
        assert!(actions.contains(&MenuAction::Sell));
    }

    #[test]
    fn test_action_for_choice_bounds() {
        assert_eq!(Role::Cashier.action_for_choice(0), None);
        assert_eq!(
            Role::Cashier.action_for_choice(1),
            Some(MenuAction::Sell)
        );
        assert_eq!(
            Role::Cashier.action_for_choice(5),
            Some(MenuAction::Back)
        );
        assert_eq!(Role::Cashier.action_for_choice(6), None);
    }

    #[test]
    fn test_role_from_choice() {
        assert_eq!(Role::from_choice(1), Some(Role::Admin));
        assert_eq!(Role::from_choice(2), Some(Role::InventoryManager));
        assert_eq!(Role::from_choice(3), Some(Role::Cashier));
        assert_eq!(Role::from_choice(4), None);
        assert_eq!(Role::from_choice(0), None);
    }

    #[test]
    fn test_render_menu_is_numbered() {
        let rendered = render_menu(Role::Cashier);
        assert!(rendered.contains("=== CASHIER MENU ==="));
        assert!(rendered.contains("1. Sell"));
        assert!(rendered.contains("5. Back"));
    }
}
