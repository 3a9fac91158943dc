#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # bookshelf
//!
//! A personal book catalog stored as a flat, slash-delimited text file.
//!
//! ## Quick Start
//!
//! ### Loading a catalog
//!
//! ```no_run
//! use bookshelf::{store, StoreConfig};
//!
//! let report = store::load("books.txt", &StoreConfig::default(), 2024)?;
//! for record in &report.records {
//!     println!("{} ({})", record.title, record.year);
//! }
//! println!("{} corrupted lines", report.corrupted_count());
//! # Ok::<(), bookshelf::CatalogError>(())
//! ```
//!
//! ### Validating an ISBN
//!
//! ```
//! use bookshelf::IsbnValidator;
//!
//! assert!(IsbnValidator::validate("0306406152"));
//! assert!(IsbnValidator::validate("9780306406157"));
//! ```
//!
//! ## Modules
//!
//! - [`escape`] — Escaping of the field separator in titles and authors
//! - [`isbn`] — ISBN-10 / ISBN-13 structural and checksum validation
//! - [`validation`] — Validation levels and publication-year bounds
//! - [`record`] — The [`BookRecord`] type and its builder
//! - [`codec`] — Parsing and serializing single catalog lines
//! - [`recovery`] — Corrupted lines and the quarantine file
//! - [`reader`] — Streaming catalog reader
//! - [`writer`] — Streaming catalog writer
//! - [`store`] — Whole-file load/save and the [`Catalog`] type
//! - [`config`] — Store configuration
//! - [`session`] — Interactive menu and add-book flow
//! - [`cli`] — Command line entry point
//! - [`error`] — Error types and result type

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod escape;
pub mod isbn;
pub mod reader;
/// Book record structure (`BookRecord`, `BookRecordBuilder`)
pub mod record;
pub mod recovery;
pub mod session;
pub mod store;
pub mod validation;
pub mod writer;

pub use codec::{parse_line, serialize_line};
pub use config::StoreConfig;
pub use error::{CatalogError, Result};
pub use escape::{decode_field, encode_field};
pub use isbn::{IsbnError, IsbnValidator};
pub use reader::{CatalogReader, Entry};
pub use record::{BookRecord, BookRecordBuilder};
pub use recovery::{CorruptedLine, CorruptionReason};
pub use session::{AddOutcome, Session};
pub use store::{find_by_isbn, find_by_title_ci, load, save, Catalog, LoadReport};
pub use validation::ValidationLevel;
pub use writer::CatalogWriter;
