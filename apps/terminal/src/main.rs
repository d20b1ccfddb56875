//! # Aisle Terminal Entry Point
//!
//! Console front end for the Aisle supermarket tool.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Create the session-scoped Inventory, Receipt, and Exporter
//! 3. Run the role-selection loop until the operator exits

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    // Run loop lives in lib.rs for better testability
    match aisle_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "terminal session aborted");
            eprintln!("Fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
