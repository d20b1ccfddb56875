//! Export error type.
//!
//! A failed export is never fatal: the menu loop reports the reason and
//! continues.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while exporting a snapshot to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The file could not be written (unwritable path, disk full, ...).
    ///
    /// The write is all-or-nothing: when this is returned, nothing was
    /// left behind at the target path.
    #[error("Failed to write export file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
