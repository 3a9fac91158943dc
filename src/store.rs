//! Loading and saving whole catalogs.
//!
//! [`load`] reads a catalog file into records plus the lines it had to
//! quarantine; [`save`] rewrites a file completely in canonical order (year
//! ascending, then title ignoring case). [`Catalog`] ties the two together
//! for a session: every mutation is persisted before it becomes visible.
//!
//! # Examples
//!
//! ```no_run
//! use bookshelf::{BookRecord, Catalog, StoreConfig};
//!
//! let (mut catalog, report) = Catalog::open("books.txt", &StoreConfig::default(), 2024)?;
//! if let Some(path) = &report.quarantine {
//!     println!("Corrupted entries saved in {}", path.display());
//! }
//! catalog.add(BookRecord::new("Dune", "Frank Herbert", "9780441013593", 1965))?;
//! # Ok::<(), bookshelf::CatalogError>(())
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::error::{CatalogError, Result};
use crate::reader::CatalogReader;
use crate::record::BookRecord;
use crate::recovery::{self, CorruptedLine};
use crate::writer::CatalogWriter;

/// Outcome of [`load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Well-formed records in canonical order
    pub records: Vec<BookRecord>,
    /// Corrupted lines in file order
    pub corrupted: Vec<CorruptedLine>,
    /// Where the corrupted lines were written, if any were found
    pub quarantine: Option<PathBuf>,
}

impl LoadReport {
    /// Returns the number of corrupted lines found.
    #[must_use]
    pub fn corrupted_count(&self) -> usize {
        self.corrupted.len()
    }
}

/// Sort records into canonical order.
///
/// Orders by [`BookRecord::canonical_cmp`]. The sort is stable, so records
/// with the same year and title keep their relative order.
pub fn sort_canonical(records: &mut [BookRecord]) {
    records.sort_by(BookRecord::canonical_cmp);
}

/// Read a catalog file.
///
/// Blank lines are skipped. Lines that fail to parse are collected and, if
/// there are any, written to `config.corrupted_path`, replacing its previous
/// contents. The returned records are in canonical order regardless of the
/// order in the file.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] if `path` does not exist, or an I/O
/// error if the catalog cannot be read or the quarantine file written.
pub fn load(path: impl AsRef<Path>, config: &StoreConfig, current_year: u32) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::IoError(e),
    })?;

    let mut reader = CatalogReader::new(BufReader::new(file), current_year);
    let (mut records, corrupted) = reader.read_all()?;
    for bad in &corrupted {
        tracing::warn!(
            line = bad.line_number,
            reason = %bad.reason,
            text = %bad.line,
            "skipping corrupted catalog line"
        );
    }

    let quarantine = if corrupted.is_empty() {
        None
    } else {
        recovery::write_quarantine(config.corrupted_path(), &corrupted)?;
        Some(config.corrupted_path().to_path_buf())
    };

    sort_canonical(&mut records);
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        corrupted = corrupted.len(),
        "catalog loaded"
    );

    Ok(LoadReport {
        records,
        corrupted,
        quarantine,
    })
}

/// Rewrite a catalog file with `records` in canonical order.
///
/// The file is truncated and written from scratch; `records` itself is not
/// reordered.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save(path: impl AsRef<Path>, records: &[BookRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut ordered = records.to_vec();
    sort_canonical(&mut ordered);

    let mut writer = CatalogWriter::new(BufWriter::new(File::create(path)?));
    writer.write_batch(&ordered)?;
    let written = writer.records_written();
    writer.finish()?;

    tracing::info!(path = %path.display(), records = written, "catalog saved");
    Ok(())
}

/// All records with exactly this ISBN.
#[must_use]
pub fn find_by_isbn<'a>(records: &'a [BookRecord], isbn: &str) -> Vec<&'a BookRecord> {
    records.iter().filter(|r| r.isbn == isbn).collect()
}

/// All records whose title equals `title` ignoring case.
#[must_use]
pub fn find_by_title_ci<'a>(records: &'a [BookRecord], title: &str) -> Vec<&'a BookRecord> {
    let wanted = title.to_lowercase();
    records
        .iter()
        .filter(|r| r.title.to_lowercase() == wanted)
        .collect()
}

/// An open catalog: the backing file path and its records in canonical order.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    records: Vec<BookRecord>,
}

impl Catalog {
    /// Load the catalog at `path`.
    ///
    /// # Errors
    ///
    /// See [`load`].
    pub fn open(
        path: impl Into<PathBuf>,
        config: &StoreConfig,
        current_year: u32,
    ) -> Result<(Self, LoadReport)> {
        let path = path.into();
        let mut report = load(&path, config, current_year)?;
        let catalog = Catalog {
            path,
            records: std::mem::take(&mut report.records),
        };
        Ok((catalog, report))
    }

    /// Create a catalog from records already in memory, without touching disk.
    #[must_use]
    pub fn from_records(path: impl Into<PathBuf>, mut records: Vec<BookRecord>) -> Self {
        sort_canonical(&mut records);
        Catalog {
            path: path.into(),
            records,
        }
    }

    /// Add a record and rewrite the backing file.
    ///
    /// The in-memory catalog only changes once the file has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written; the catalog is then
    /// left exactly as it was.
    pub fn add(&mut self, record: BookRecord) -> Result<()> {
        let mut candidate = Vec::with_capacity(self.records.len() + 1);
        candidate.extend_from_slice(&self.records);
        candidate.push(record);
        sort_canonical(&mut candidate);

        save(&self.path, &candidate)?;
        self.records = candidate;
        Ok(())
    }

    /// Records in canonical order.
    #[must_use]
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// See [`find_by_isbn`].
    #[must_use]
    pub fn find_by_isbn(&self, isbn: &str) -> Vec<&BookRecord> {
        find_by_isbn(&self.records, isbn)
    }

    /// See [`find_by_title_ci`].
    #[must_use]
    pub fn find_by_title_ci(&self, title: &str) -> Vec<&BookRecord> {
        find_by_title_ci(&self.records, title)
    }
}
