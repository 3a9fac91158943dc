//! Common test helpers and utilities shared across test suite.

use std::path::{Path, PathBuf};

use bookshelf::{BookRecord, StoreConfig};
use tempfile::TempDir;

/// Fixed "current year" so boundary tests do not depend on the clock.
pub const NOW: u32 = 2024;

/// A scratch directory holding a catalog file and its quarantine file.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Workspace {
            dir: tempfile::tempdir().expect("Could not create temp dir"),
        }
    }

    /// Path of the catalog file inside the workspace.
    pub fn catalog_path(&self) -> PathBuf {
        self.dir.path().join("books.txt")
    }

    /// Path of the quarantine file inside the workspace.
    pub fn corrupted_path(&self) -> PathBuf {
        self.dir.path().join("corrupted_data.txt")
    }

    /// Store configuration that quarantines into this workspace.
    pub fn config(&self) -> StoreConfig {
        StoreConfig::default().with_corrupted_path(self.corrupted_path())
    }

    /// Writes the catalog file and returns its path.
    pub fn write_catalog(&self, contents: &str) -> PathBuf {
        let path = self.catalog_path();
        std::fs::write(&path, contents).expect("Could not write catalog");
        path
    }

    /// Reads a file from the workspace.
    #[allow(dead_code)]
    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Could not read file")
    }
}

/// Creates a record with a structurally valid ISBN.
#[allow(dead_code)]
pub fn book(title: &str, author: &str, year: u32) -> BookRecord {
    BookRecord::new(title, author, "0306406152", year)
}
