//! Validation levels and publication-year bounds.
//!
//! Records are checked at one of two strengths, see [`ValidationLevel`]. Year
//! checks take the current calendar year as an explicit argument so that
//! validation stays pure; only the process entry point reads the clock, via
//! [`current_year`].

use chrono::Datelike;

use crate::error::{CatalogError, Result};

/// Earliest publication year accepted anywhere in the catalog.
pub const MIN_YEAR: u32 = 1000;

/// How strictly an ISBN is checked.
///
/// Lines read from a catalog file are only checked structurally, while
/// interactively entered ISBNs must also pass their checksum. Unifying the
/// two would change which existing files load cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationLevel {
    /// Digits only, length 10 or 13 (default)
    #[default]
    Structural,
    /// Structural check plus the ISBN-10 / ISBN-13 checksum
    Checksum,
}

/// Returns the current calendar year in local time.
#[must_use]
pub fn current_year() -> u32 {
    chrono::Local::now().year().unsigned_abs()
}

/// Returns true if `year` lies within `MIN_YEAR..=current_year`.
#[must_use]
pub fn is_year_in_range(year: u32, current_year: u32) -> bool {
    (MIN_YEAR..=current_year).contains(&year)
}

/// Parse a publication year written as ASCII digits and check its bounds.
///
/// No surrounding whitespace or sign is accepted.
///
/// # Examples
///
/// ```
/// use bookshelf::validation::parse_year;
///
/// assert_eq!(parse_year("1999", 2024).unwrap(), 1999);
/// assert!(parse_year("999", 2024).is_err());
/// assert!(parse_year("19x9", 2024).is_err());
/// ```
///
/// # Errors
///
/// Returns [`CatalogError::InvalidYear`] if the text is not all digits or the
/// year is outside `1000..=current_year`.
pub fn parse_year(text: &str, current_year: u32) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::InvalidYear(format!(
            "'{text}' is not a number"
        )));
    }

    // All-digit text only fails to parse on overflow, which is out of range anyway.
    let year = text.parse::<u32>().map_err(|_| out_of_range(text, current_year))?;
    if !is_year_in_range(year, current_year) {
        return Err(out_of_range(text, current_year));
    }
    Ok(year)
}

fn out_of_range(text: &str, current_year: u32) -> CatalogError {
    CatalogError::InvalidYear(format!(
        "{text} is not between {MIN_YEAR} and {current_year}"
    ))
}
