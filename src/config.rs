//! Configuration options for the catalog store.
//!
//! This module provides the [`StoreConfig`] struct which controls where the
//! store puts lines it could not parse.

use std::path::{Path, PathBuf};

/// Default name of the quarantine file, relative to the working directory.
pub const DEFAULT_CORRUPTED_FILE: &str = "corrupted_data.txt";

/// Configuration for loading and saving a catalog.
///
/// # Examples
///
/// ```
/// use bookshelf::StoreConfig;
///
/// // Default configuration: quarantine into ./corrupted_data.txt
/// let config = StoreConfig::default();
/// assert_eq!(config.corrupted_path.to_str(), Some("corrupted_data.txt"));
///
/// let config = StoreConfig::default().with_corrupted_path("/tmp/rejects.txt");
/// assert_eq!(config.corrupted_path.to_str(), Some("/tmp/rejects.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// File that receives corrupted lines found during a load.
    ///
    /// It is overwritten whenever a load finds at least one corrupted line and
    /// left alone otherwise.
    pub corrupted_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            corrupted_path: PathBuf::from(DEFAULT_CORRUPTED_FILE),
        }
    }
}

impl StoreConfig {
    /// Set the quarantine file path.
    #[must_use]
    pub fn with_corrupted_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corrupted_path = path.into();
        self
    }

    /// Returns the quarantine file path.
    #[must_use]
    pub fn corrupted_path(&self) -> &Path {
        &self.corrupted_path
    }
}
