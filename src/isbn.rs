//! ISBN validation.
//!
//! Two strengths of check are provided, matching [`ValidationLevel`]: a cheap
//! structural check (10 or 13 ASCII digits) and the checksum rules of
//! ISBN-10 (modulus 11) and ISBN-13 (modulus 10).

use thiserror::Error;

use crate::validation::ValidationLevel;

/// Reason an ISBN was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnError {
    /// Not made of digits only, or not 10 or 13 characters long.
    #[error("ISBN must be exactly 10 or 13 digits")]
    Structure,

    /// Ten digits whose weighted sum is not divisible by 11.
    #[error("ISBN-10 checksum failed, it must satisfy the modulus 11 rule")]
    Isbn10Checksum,

    /// Thirteen digits whose weighted sum is not divisible by 10.
    #[error("ISBN-13 checksum failed, it must satisfy the modulus 10 rule")]
    Isbn13Checksum,
}

/// ISBN (International Standard Book Number) validator
#[derive(Debug)]
pub struct IsbnValidator;

impl IsbnValidator {
    /// Check that an ISBN is all ASCII digits and 10 or 13 long.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::IsbnValidator;
    ///
    /// assert!(IsbnValidator::is_structurally_valid("0306406153"));
    /// assert!(!IsbnValidator::is_structurally_valid("0-306-40615-2"));
    /// ```
    #[must_use]
    pub fn is_structurally_valid(isbn: &str) -> bool {
        matches!(isbn.len(), 10 | 13) && isbn.bytes().all(|b| b.is_ascii_digit())
    }

    /// Validate an ISBN-10 checksum
    ///
    /// Digits are weighted 1 through 10 from left to right; the ISBN is valid
    /// when the weighted sum is divisible by 11.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::IsbnValidator;
    ///
    /// assert!(IsbnValidator::validate_isbn10("0306406152"));
    /// assert!(!IsbnValidator::validate_isbn10("0306406153"));
    /// ```
    #[must_use]
    pub fn validate_isbn10(isbn: &str) -> bool {
        if isbn.len() != 10 {
            return false;
        }

        let mut sum = 0;
        for (weight, ch) in (1..).zip(isbn.chars()) {
            let Some(digit) = ch.to_digit(10) else {
                return false;
            };
            sum += digit * weight;
        }

        sum % 11 == 0
    }

    /// Validate an ISBN-13 checksum
    ///
    /// Digits at even zero-based positions are weighted 1 and those at odd
    /// positions 3; the ISBN is valid when the weighted sum is divisible by 10.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::IsbnValidator;
    ///
    /// assert!(IsbnValidator::validate_isbn13("9780306406157"));
    /// assert!(!IsbnValidator::validate_isbn13("9780306406158"));
    /// ```
    #[must_use]
    pub fn validate_isbn13(isbn: &str) -> bool {
        if isbn.len() != 13 {
            return false;
        }

        let mut sum = 0;
        for (i, ch) in isbn.chars().enumerate() {
            let Some(digit) = ch.to_digit(10) else {
                return false;
            };
            let weight = if i % 2 == 0 { 1 } else { 3 };
            sum += digit * weight;
        }

        sum % 10 == 0
    }

    /// Validate an ISBN (auto-detect ISBN-10 or ISBN-13) including its checksum
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::IsbnValidator;
    ///
    /// assert!(IsbnValidator::validate("0306406152")); // ISBN-10
    /// assert!(IsbnValidator::validate("9780306406157")); // ISBN-13
    /// assert!(!IsbnValidator::validate("978-0306406157"));
    /// ```
    #[must_use]
    pub fn validate(isbn: &str) -> bool {
        Self::check(isbn, ValidationLevel::Checksum).is_ok()
    }

    /// Check an ISBN at the given level, reporting why it fails.
    ///
    /// A structural failure is always reported as [`IsbnError::Structure`],
    /// never as a checksum failure.
    ///
    /// # Errors
    ///
    /// Returns the [`IsbnError`] describing the first check that failed.
    pub fn check(isbn: &str, level: ValidationLevel) -> Result<(), IsbnError> {
        if !Self::is_structurally_valid(isbn) {
            return Err(IsbnError::Structure);
        }
        if level == ValidationLevel::Structural {
            return Ok(());
        }

        match isbn.len() {
            10 if !Self::validate_isbn10(isbn) => Err(IsbnError::Isbn10Checksum),
            13 if !Self::validate_isbn13(isbn) => Err(IsbnError::Isbn13Checksum),
            _ => Ok(()),
        }
    }
}
