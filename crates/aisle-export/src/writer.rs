//! # Export Writer
//!
//! Timestamping and all-or-nothing file writes.
//!
//! ## Write Protocol
//! ```text
//! export(entity)
//!      │
//!      ▼
//! 1. Read clock once ──► "20260829_143015" (local time)
//!      │
//!      ▼
//! 2. Render content with that timestamp
//!      │
//!      ▼
//! 3. Write <dir>/.<name>.tmp with the FULL content
//!      │
//!      ├── failure ──► remove temp, return WriteFailed (final path untouched)
//!      ▼
//! 4. Rename temp ──► <dir>/<prefix>_<timestamp>.txt
//!
//! The final path either holds the complete content or does not exist.
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};

use crate::error::ExportError;
use crate::render::Exportable;

/// Timestamp format shared by file names and file headers.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes entity snapshots to timestamped files in a fixed directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    /// Creates an exporter targeting `dir`.
    ///
    /// The directory is not created here; an unwritable or missing
    /// directory surfaces as `WriteFailed` on the first export.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Exporter { dir: dir.into() }
    }

    /// Exports the entity's current state, returning the path written.
    ///
    /// The clock is read exactly once per export, so the header
    /// timestamp always matches the one in the file name.
    pub fn export<T: Exportable>(&self, entity: &T) -> Result<PathBuf, ExportError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let file_name = format!("{}_{}.txt", entity.file_prefix(), timestamp);
        let path = self.dir.join(&file_name);
        let content = entity.export_content(&timestamp);

        match write_atomic(&path, &content) {
            Ok(()) => {
                info!(path = %path.display(), bytes = content.len(), "export written");
                Ok(path)
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "export failed");
                Err(ExportError::WriteFailed { path, source })
            }
        }
    }
}

/// Writes `content` to `path` all-or-nothing.
///
/// The content lands in a dot-prefixed temp file in the same directory
/// first and is renamed into place, so a failure partway through never
/// leaves partial content at the final path.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("export");
    let tmp_path = path.with_file_name(format!(".{file_name}.tmp"));

    if let Err(err) = fs::write(&tmp_path, content) {
        // Best effort: the temp file may not exist at all
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aisle_core::{Inventory, Money, Product, Receipt};

    #[test]
    fn test_export_inventory_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        let mut inventory = Inventory::new();
        inventory
            .insert(Product::new(1, "Milk", 50, Money::from_cents(250)))
            .unwrap();

        let path = exporter.export(&inventory).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("inventory_"));
        assert!(name.ends_with(".txt"));
        // inventory_YYYYMMDD_HHMMSS.txt
        assert_eq!(name.len(), "inventory_".len() + 15 + ".txt".len());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("=== INVENTORY EXPORT ===\n"));
        assert!(content.ends_with("1 Milk 50 2.50\n"));
    }

    #[test]
    fn test_export_receipt_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        let mut receipt = Receipt::new();
        receipt.add_item("Milk", 50, Money::from_cents(250));

        let path = exporter.export(&receipt).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("receipt_"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Milk x50 @ $2.50 = $125.00"));
        assert!(content.contains("Total: $125.00"));
    }

    #[test]
    fn test_header_timestamp_matches_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        let path = exporter.export(&Inventory::new()).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        let ts_in_name = name
            .strip_prefix("inventory_")
            .and_then(|s| s.strip_suffix(".txt"))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(&format!("Timestamp: {ts_in_name}")));
    }

    #[test]
    fn test_missing_directory_fails_and_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let exporter = Exporter::new(&missing);

        let err = exporter.export(&Inventory::new()).unwrap_err();
        assert!(matches!(err, ExportError::WriteFailed { .. }));
        assert!(!missing.exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        exporter.export(&Inventory::new()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
