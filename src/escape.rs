//! Escaping of the field separator inside free-text fields.
//!
//! Catalog lines separate their fields with [`SEPARATOR`]. Titles and authors
//! may legitimately contain that character, so it is stored as [`SUBSTITUTE`]
//! on disk and mapped back when a line is read.
//!
//! # Examples
//!
//! ```
//! use bookshelf::escape::{decode_field, encode_field};
//!
//! let stored = encode_field("Either/Or");
//! assert_eq!(stored, "Either|Or");
//! assert_eq!(decode_field(&stored), "Either/Or");
//! ```

use crate::error::{CatalogError, Result};

/// Character separating the fields of a catalog line.
pub const SEPARATOR: char = '/';

/// Character standing in for [`SEPARATOR`] inside an encoded field.
pub const SUBSTITUTE: char = '|';

/// Replace every separator in `text` with the substitute character.
#[must_use]
pub fn encode_field(text: &str) -> String {
    text.replace(SEPARATOR, &SUBSTITUTE.to_string())
}

/// Replace every substitute character in `text` with the separator.
#[must_use]
pub fn decode_field(text: &str) -> String {
    text.replace(SUBSTITUTE, &SEPARATOR.to_string())
}

/// Returns true if `text` contains the substitute character.
///
/// Such text cannot survive an encode/decode round trip: the substitute would
/// come back as a separator.
#[must_use]
pub fn contains_substitute(text: &str) -> bool {
    text.contains(SUBSTITUTE)
}

/// Reject free text that would be altered by a round trip through the file.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidField`] if `text` contains [`SUBSTITUTE`].
pub fn check_free_text(text: &str) -> Result<()> {
    if contains_substitute(text) {
        return Err(CatalogError::InvalidField(format!(
            "'{SUBSTITUTE}' is reserved and cannot be used"
        )));
    }
    Ok(())
}
