//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all library operations
//! and the [`Result`] convenience type.

use std::path::PathBuf;

use thiserror::Error;

use crate::isbn::IsbnError;

/// Error type for all catalog library operations.
///
/// Represents the conditions that can occur while validating records,
/// reading a catalog file, or writing it back out.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// An ISBN failed structural or checksum validation.
    #[error("Invalid ISBN: {0}")]
    InvalidIsbn(#[from] IsbnError),

    /// A publication year was not a number or fell outside the accepted range.
    #[error("Invalid year: {0}")]
    InvalidYear(String),

    /// A free-text field (title or author) was empty or held a reserved character.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// IO error from the underlying source/destination.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
