//! Writing catalog records as slash-delimited lines.
//!
//! This module provides [`CatalogWriter`] for serializing [`BookRecord`]
//! instances to any destination implementing [`std::io::Write`]. The writer
//! does not reorder anything; canonical ordering is the job of
//! [`crate::store::save`].
//!
//! # Examples
//!
//! ```
//! use bookshelf::writer::CatalogWriter;
//! use bookshelf::BookRecord;
//!
//! let mut writer = CatalogWriter::new(Vec::new());
//! writer.write_record(&BookRecord::new("Either/Or", "S. K.", "9780140445770", 1992))?;
//! let bytes = writer.finish()?;
//! assert_eq!(bytes, b"Either|Or/S. K./9780140445770/1992\n");
//! # Ok::<(), bookshelf::CatalogError>(())
//! ```

use std::io::Write;

use crate::codec;
use crate::error::Result;
use crate::record::BookRecord;

/// Writer for the slash-delimited catalog format.
///
/// Each record becomes exactly one `\n`-terminated line.
#[derive(Debug)]
pub struct CatalogWriter<W: Write> {
    writer: W,
    records_written: usize,
}

impl<W: Write> CatalogWriter<W> {
    /// Create a new catalog writer.
    ///
    /// # Arguments
    ///
    /// * `writer` - Any destination implementing [`std::io::Write`]
    pub fn new(writer: W) -> Self {
        CatalogWriter {
            writer,
            records_written: 0,
        }
    }

    /// Write a single record.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying destination fails.
    pub fn write_record(&mut self, record: &BookRecord) -> Result<()> {
        let line = codec::serialize_line(record);
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    /// Write every record in `records`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying destination fails.
    pub fn write_batch<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a BookRecord>,
    ) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush the writer and hand back the underlying destination.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the underlying writer fails.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Returns the number of records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}
