//! Line codec for the catalog file format.
//!
//! Each record occupies one line:
//!
//! ```text
//! <title>/<author>/<isbn>/<year>
//! ```
//!
//! Separators inside the title and author are stored escaped (see
//! [`crate::escape`]). Parsing checks the ISBN only structurally; see
//! [`ValidationLevel`](crate::validation::ValidationLevel).
//!
//! # Examples
//!
//! ```
//! use bookshelf::codec::{parse_line, serialize_line};
//! use bookshelf::BookRecord;
//!
//! let record = BookRecord::new("Either/Or", "Kierkegaard", "9780140445770", 1992);
//! let line = serialize_line(&record);
//! assert_eq!(line, "Either|Or/Kierkegaard/9780140445770/1992");
//! assert_eq!(parse_line(&line, 2024), Ok(Some(record)));
//! ```

use crate::escape::{self, SEPARATOR};
use crate::isbn::IsbnValidator;
use crate::record::BookRecord;
use crate::recovery::{CorruptedLine, CorruptionReason};
use crate::validation;

/// Number of fields on every catalog line.
pub const FIELD_COUNT: usize = 4;

/// Parse one catalog line.
///
/// Returns `Ok(None)` for a blank or whitespace-only line, `Ok(Some(record))`
/// for a well-formed one, and the trimmed raw line as a [`CorruptedLine`]
/// otherwise.
///
/// # Errors
///
/// Returns a [`CorruptedLine`] when the line has the wrong number of fields,
/// a structurally invalid ISBN, or a year outside `1000..=current_year`.
pub fn parse_line(line: &str, current_year: u32) -> Result<Option<BookRecord>, CorruptedLine> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some([title, author, isbn, year]) = split_fields(line) else {
        return Err(CorruptedLine::new(line, CorruptionReason::FieldCount));
    };

    if !IsbnValidator::is_structurally_valid(isbn) {
        return Err(CorruptedLine::new(line, CorruptionReason::InvalidIsbn));
    }

    let Ok(year) = validation::parse_year(year, current_year) else {
        return Err(CorruptedLine::new(line, CorruptionReason::InvalidYear));
    };

    Ok(Some(BookRecord::new(
        escape::decode_field(title).trim(),
        escape::decode_field(author).trim(),
        isbn,
        year,
    )))
}

/// Parse one catalog line, tagging any failure with its 1-based line number.
///
/// # Errors
///
/// See [`parse_line`].
pub fn parse_numbered_line(
    line: &str,
    line_number: usize,
    current_year: u32,
) -> Result<Option<BookRecord>, CorruptedLine> {
    parse_line(line, current_year).map_err(|bad| bad.at_line(line_number))
}

/// Serialize a record as one catalog line, without a line terminator.
///
/// The record is trusted to be valid already; nothing is checked here.
#[must_use]
pub fn serialize_line(record: &BookRecord) -> String {
    format!(
        "{title}{SEPARATOR}{author}{SEPARATOR}{isbn}{SEPARATOR}{year}",
        title = escape::encode_field(&record.title),
        author = escape::encode_field(&record.author),
        isbn = record.isbn,
        year = record.year,
    )
}

/// Split a line into exactly [`FIELD_COUNT`] fields.
///
/// The separator is ASCII, so scanning bytes never lands inside a multi-byte
/// character.
fn split_fields(line: &str) -> Option<[&str; FIELD_COUNT]> {
    let bytes = line.as_bytes();
    let mut cuts = memchr::memchr_iter(SEPARATOR as u8, bytes);
    let first = cuts.next()?;
    let second = cuts.next()?;
    let third = cuts.next()?;
    if cuts.next().is_some() {
        return None;
    }

    Some([
        &line[..first],
        &line[first + 1..second],
        &line[second + 1..third],
        &line[third + 1..],
    ])
}
