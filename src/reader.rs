//! Reading catalog records from line-oriented streams.
//!
//! This module provides [`CatalogReader`] for reading catalog lines from any
//! source that implements [`std::io::BufRead`].
//!
//! # Examples
//!
//! ```
//! use bookshelf::reader::{CatalogReader, Entry};
//! use std::io::Cursor;
//!
//! let data = "Dune/Frank Herbert/9780441013593/1965\n\nbroken line\n";
//! let mut reader = CatalogReader::new(Cursor::new(data), 2024);
//!
//! while let Some(entry) = reader.read_entry()? {
//!     match entry {
//!         Entry::Record(record) => println!("{}", record.title),
//!         Entry::Corrupted(bad) => eprintln!("{bad}"),
//!     }
//! }
//! # Ok::<(), bookshelf::CatalogError>(())
//! ```

use std::io::BufRead;

use crate::codec;
use crate::error::Result;
use crate::record::BookRecord;
use crate::recovery::{CorruptedLine, CorruptionReason};

/// One non-blank line of a catalog, parsed or quarantined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A well-formed record
    Record(BookRecord),
    /// A line that failed to parse
    Corrupted(CorruptedLine),
}

/// Reader for the slash-delimited catalog format.
///
/// `CatalogReader` yields one [`Entry`] per non-blank line. Malformed lines
/// never stop the reader; only I/O failures do.
#[derive(Debug)]
pub struct CatalogReader<R: BufRead> {
    reader: R,
    current_year: u32,
    line_number: usize,
    records_read: usize,
    corrupted_read: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> CatalogReader<R> {
    /// Create a new catalog reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - Any source implementing [`std::io::BufRead`]
    /// * `current_year` - Upper bound for publication years
    pub fn new(reader: R, current_year: u32) -> Self {
        CatalogReader {
            reader,
            current_year,
            line_number: 0,
            records_read: 0,
            corrupted_read: 0,
            buffer: Vec::new(),
        }
    }

    /// Read the next non-blank line.
    ///
    /// Returns `Ok(None)` at end of input. A line that is not valid UTF-8 is
    /// returned as a corrupted entry rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    pub fn read_entry(&mut self) -> Result<Option<Entry>> {
        loop {
            self.buffer.clear();
            if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let parsed = match std::str::from_utf8(&self.buffer) {
                Ok(line) => codec::parse_numbered_line(line, self.line_number, self.current_year),
                Err(_) => {
                    let lossy = String::from_utf8_lossy(&self.buffer);
                    let trimmed = lossy.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    Err(CorruptedLine::new(trimmed, CorruptionReason::InvalidEncoding)
                        .at_line(self.line_number))
                },
            };

            match parsed {
                Ok(Some(record)) => {
                    self.records_read += 1;
                    return Ok(Some(Entry::Record(record)));
                },
                Ok(None) => {},
                Err(bad) => {
                    self.corrupted_read += 1;
                    return Ok(Some(Entry::Corrupted(bad)));
                },
            }
        }
    }

    /// Read every remaining entry, split into records and corrupted lines.
    ///
    /// Both sequences keep the relative order of the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    pub fn read_all(&mut self) -> Result<(Vec<BookRecord>, Vec<CorruptedLine>)> {
        let mut records = Vec::new();
        let mut corrupted = Vec::new();
        while let Some(entry) = self.read_entry()? {
            match entry {
                Entry::Record(record) => records.push(record),
                Entry::Corrupted(bad) => corrupted.push(bad),
            }
        }
        Ok((records, corrupted))
    }

    /// Returns the number of well-formed records read so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Returns the number of corrupted lines read so far.
    #[must_use]
    pub fn corrupted_read(&self) -> usize {
        self.corrupted_read
    }

    /// Returns the number of physical lines consumed so far, blanks included.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}
