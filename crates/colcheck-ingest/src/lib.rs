//! Header row extraction for colcheck.
//!
//! This crate reads the first row of a tabular file and returns it as a
//! [`ColumnSequence`](colcheck_model::ColumnSequence). Nothing past the
//! header row is parsed.
//!
//! # Features
//!
//! - **Format dispatch**: `.xlsx`, `.xls` and `.csv`, chosen by extension
//! - **CSV**: configurable single-character delimiter with recovery of
//!   headers that collapse into one field
//! - **Blank headers**: named `Unnamed: N` after their position
//! - **Excel**: header row of the first sheet, streamed for `.xlsx`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use colcheck_ingest::{Delimiter, read_headers};
//!
//! let columns = read_headers(Path::new("extract.csv"), Some(Delimiter::SEMICOLON))?;
//! println!("{} columns", columns.len());
//! ```

mod delimited;
mod error;
mod format;
mod source;
mod spreadsheet;
mod unnamed;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Dispatch ===
pub use format::SourceFormat;
pub use source::{HeaderSource, read_headers};

// === CSV Reading ===
pub use delimited::{Delimiter, read_csv_headers};

// === Spreadsheet Reading ===
pub use spreadsheet::{read_xls_headers, read_xlsx_headers};
