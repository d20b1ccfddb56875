//! # Aisle Terminal Library
//!
//! Core library for the Aisle console application.
//!
//! ## Module Organization
//! ```text
//! aisle_terminal/
//! ├── lib.rs          ◄─── You are here (setup & run loop)
//! ├── app.rs          ◄─── Session state + action dispatch
//! ├── menu.rs         ◄─── Roles, action tables, menu rendering
//! ├── input.rs        ◄─── Retry-until-valid input readers
//! └── screen.rs       ◄─── Clear screen / pause helpers
//! ```
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Ownership                                  │
//! │                                                                         │
//! │  run() owns ──► App { Inventory, Receipt, Exporter }                    │
//! │                        │                                                │
//! │                        │  &mut for one menu session                     │
//! │                        ▼                                                │
//! │                  active role menu                                       │
//! │                                                                         │
//! │  No menu owns the catalog or the receipt; they borrow them for the      │
//! │  duration of the session and hand them back on "Back".                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod input;
pub mod menu;
pub mod screen;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Runs the terminal application until the operator exits.
pub fn run() -> io::Result<()> {
    init_tracing();
    info!("Starting Aisle terminal");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // Exports land in the working directory, like the rest of the
    // session's artifacts.
    let mut app = App::new(".");
    app.run(&mut input)
}

/// Initializes the tracing subscriber.
///
/// Default level is `info`; override with `RUST_LOG`
/// (e.g. `RUST_LOG=debug`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}
