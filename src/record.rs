//! Book record structure and builder.
//!
//! A [`BookRecord`] is the only entity in the catalog: title, author, ISBN and
//! publication year. Records read from a file are checked by the codec;
//! records entered by hand go through [`BookRecordBuilder`], which applies the
//! stricter [`ValidationLevel::Checksum`] rules.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{CatalogError, Result};
use crate::escape;
use crate::isbn::IsbnValidator;
use crate::validation::{self, ValidationLevel};

/// One book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookRecord {
    /// Title, free text
    pub title: String,
    /// Author, free text
    pub author: String,
    /// ISBN, 10 or 13 ASCII digits kept as text
    pub isbn: String,
    /// Publication year
    pub year: u32,
}

impl BookRecord {
    /// Create a record without validating it.
    ///
    /// Use [`BookRecord::builder`] to construct a checked record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: u32,
    ) -> Self {
        BookRecord {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
        }
    }

    /// Start building a validated record.
    #[must_use]
    pub fn builder() -> BookRecordBuilder {
        BookRecordBuilder::default()
    }

    /// Check all four fields at once.
    ///
    /// Title and author must be non-empty after trimming; the ISBN is checked
    /// at `level` and the year against `1000..=current_year`.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self, level: ValidationLevel, current_year: u32) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::InvalidField("Title cannot be empty".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(CatalogError::InvalidField(
                "Author name cannot be empty".to_string(),
            ));
        }
        IsbnValidator::check(&self.isbn, level)?;
        if !validation::is_year_in_range(self.year, current_year) {
            return Err(CatalogError::InvalidYear(format!(
                "{} is not between {} and {current_year}",
                self.year,
                validation::MIN_YEAR
            )));
        }
        Ok(())
    }

    /// Compare two records in canonical catalog order.
    ///
    /// Year ascending, then title ascending ignoring case.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.title.to_lowercase().cmp(&other.title.to_lowercase()))
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.title, self.author, self.isbn, self.year
        )
    }
}

/// Builder for [`BookRecord`] that validates on [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use bookshelf::BookRecord;
///
/// let record = BookRecord::builder()
///     .title("Either/Or")
///     .author("Søren Kierkegaard")
///     .isbn("9780140445770")
///     .year(1992)
///     .build(2024)?;
/// assert_eq!(record.title, "Either/Or");
/// # Ok::<(), bookshelf::CatalogError>(())
/// ```
#[derive(Debug, Default)]
pub struct BookRecordBuilder {
    title: String,
    author: String,
    isbn: String,
    year: u32,
}

impl BookRecordBuilder {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the ISBN.
    #[must_use]
    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    /// Set the publication year.
    #[must_use]
    pub fn year(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    /// Trim the text fields and validate the record.
    ///
    /// The ISBN is always checked at [`ValidationLevel::Checksum`]. Title and
    /// author may not contain [`escape::SUBSTITUTE`].
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn build(self, current_year: u32) -> Result<BookRecord> {
        let record = BookRecord::new(
            self.title.trim(),
            self.author.trim(),
            self.isbn.trim(),
            self.year,
        );
        escape::check_free_text(&record.title)?;
        escape::check_free_text(&record.author)?;
        record.validate(ValidationLevel::Checksum, current_year)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isbn::IsbnError;

    const NOW: u32 = 2024;

    fn sample() -> BookRecord {
        BookRecord::new("Dune", "Frank Herbert", "9780441013593", 1965)
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(sample()
            .validate(ValidationLevel::Checksum, NOW)
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let mut r = sample();
        r.title = "  ".to_string();
        assert!(matches!(
            r.validate(ValidationLevel::Structural, NOW),
            Err(CatalogError::InvalidField(_))
        ));

        let mut r = sample();
        r.author = String::new();
        assert!(matches!(
            r.validate(ValidationLevel::Structural, NOW),
            Err(CatalogError::InvalidField(_))
        ));

        let mut r = sample();
        r.isbn = "97804410135".to_string();
        assert!(matches!(
            r.validate(ValidationLevel::Structural, NOW),
            Err(CatalogError::InvalidIsbn(IsbnError::Structure))
        ));

        let mut r = sample();
        r.year = 999;
        assert!(matches!(
            r.validate(ValidationLevel::Structural, NOW),
            Err(CatalogError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_validate_levels_differ_on_checksum() {
        let mut r = sample();
        r.isbn = "9780441013594".to_string();
        assert!(r.validate(ValidationLevel::Structural, NOW).is_ok());
        assert!(matches!(
            r.validate(ValidationLevel::Checksum, NOW),
            Err(CatalogError::InvalidIsbn(IsbnError::Isbn13Checksum))
        ));
    }

    #[test]
    fn test_canonical_cmp() {
        let a = BookRecord::new("alpha", "x", "0306406152", 1999);
        let b = BookRecord::new("Beta", "x", "0306406152", 1999);
        let z = BookRecord::new("Zed", "x", "0306406152", 2001);
        assert_eq!(a.canonical_cmp(&b), Ordering::Less);
        assert_eq!(b.canonical_cmp(&z), Ordering::Less);
        assert_eq!(z.canonical_cmp(&a), Ordering::Greater);
        let a_upper = BookRecord::new("ALPHA", "y", "0306406152", 1999);
        assert_eq!(a.canonical_cmp(&a_upper), Ordering::Equal);
    }

    #[test]
    fn test_builder_trims_and_checks_checksum() {
        let record = BookRecord::builder()
            .title("  Dune ")
            .author(" Frank Herbert")
            .isbn("9780441013593 ")
            .year(1965)
            .build(NOW)
            .unwrap();
        assert_eq!(record, sample());

        let err = BookRecord::builder()
            .title("Dune")
            .author("Frank Herbert")
            .isbn("9780441013594")
            .year(1965)
            .build(NOW)
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidIsbn(_)));
    }

    #[test]
    fn test_builder_rejects_substitute_character() {
        let err = BookRecord::builder()
            .title("Pipes | Filters")
            .author("Anon")
            .isbn("0306406152")
            .year(2000)
            .build(NOW)
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Dune | Frank Herbert | 9780441013593 | 1965"
        );
    }
}
