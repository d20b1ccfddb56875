//! # aisle-export: Snapshot Export Layer
//!
//! Renders aisle-core entities into timestamped text files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Export Data Flow                                  │
//! │                                                                         │
//! │  Inventory.snapshot() ──┐                                               │
//! │                         ├──► Exportable::export_content(timestamp)      │
//! │  Receipt.items()/total()┘            │                                  │
//! │                                      ▼                                  │
//! │                         Exporter::export(entity)                        │
//! │                                      │                                  │
//! │                    ┌─────────────────┼─────────────────┐                │
//! │                    ▼                 ▼                 ▼                │
//! │              read clock        write temp file    rename into place     │
//! │           (YYYYMMDD_HHMMSS)   (full content)     (all-or-nothing)       │
//! │                                                                         │
//! │  On any failure: nothing appears at the final path.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`render`] - The `Exportable` contract and its Inventory/Receipt impls
//! - [`writer`] - Timestamping and atomic file writes
//! - [`error`] - Export error type

pub mod error;
pub mod render;
pub mod writer;

pub use error::ExportError;
pub use render::Exportable;
pub use writer::Exporter;
