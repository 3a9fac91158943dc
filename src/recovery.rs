//! Quarantine of lines that fail to parse.
//!
//! A catalog load never aborts because of a single bad line. Each such line
//! becomes a [`CorruptedLine`]; the whole batch is then written verbatim to a
//! side file so the user can review and fix it by hand.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Why a line was quarantined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptionReason {
    /// The line did not split into exactly four fields
    FieldCount,
    /// The ISBN was not 10 or 13 ASCII digits
    InvalidIsbn,
    /// The year was not a number, or out of range
    InvalidYear,
    /// The line was not valid UTF-8
    InvalidEncoding,
}

impl fmt::Display for CorruptionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount => write!(f, "malformed line"),
            Self::InvalidIsbn => write!(f, "invalid ISBN format"),
            Self::InvalidYear => write!(f, "invalid year"),
            Self::InvalidEncoding => write!(f, "invalid UTF-8"),
        }
    }
}

/// A raw catalog line that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptedLine {
    /// The offending text, with surrounding whitespace removed
    pub line: String,
    /// 1-based position in the source file, 0 when unknown
    pub line_number: usize,
    /// Diagnostic only; never written to the quarantine file
    pub reason: CorruptionReason,
}

impl CorruptedLine {
    /// Create a corrupted line with no known position.
    #[must_use]
    pub fn new(line: impl Into<String>, reason: CorruptionReason) -> Self {
        CorruptedLine {
            line: line.into(),
            line_number: 0,
            reason,
        }
    }

    /// Attach the 1-based line number.
    #[must_use]
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = line_number;
        self
    }
}

impl fmt::Display for CorruptedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} → {}", self.line_number, self.reason, self.line)
    }
}

/// Overwrite `path` with one raw corrupted line per row.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_quarantine(path: &Path, corrupted: &[CorruptedLine]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for bad in corrupted {
        writeln!(writer, "{}", bad.line)?;
    }
    writer.flush()?;
    tracing::info!(
        path = %path.display(),
        count = corrupted.len(),
        "corrupted entries quarantined"
    );
    Ok(())
}
