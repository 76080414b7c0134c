//! Header extraction entry point.

use std::path::{Path, PathBuf};

use colcheck_model::ColumnSequence;

use crate::delimited::{Delimiter, read_csv_headers};
use crate::error::Result;
use crate::format::SourceFormat;
use crate::spreadsheet::{read_xls_headers, read_xlsx_headers};

/// A file whose header row is to be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSource {
    pub path: PathBuf,
    /// Field delimiter; only used for delimited-text files.
    pub delimiter: Option<Delimiter>,
}

impl HeaderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: None,
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Option<Delimiter>) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn format(&self) -> Result<SourceFormat> {
        SourceFormat::from_path(&self.path)
    }

    /// Reads the header row, choosing the reader from the extension before
    /// the file is opened. The delimiter is ignored for workbooks.
    pub fn read(&self) -> Result<ColumnSequence> {
        let path = self.path.as_path();
        let format = self.format()?;
        if format.is_spreadsheet() && self.delimiter.is_some() {
            tracing::debug!(path = %path.display(), "Delimiter ignored for workbook");
        }

        let columns = match format {
            SourceFormat::Xlsx => read_xlsx_headers(path)?,
            SourceFormat::Xls => read_xls_headers(path)?,
            SourceFormat::Csv => read_csv_headers(path, self.delimiter)?,
        };

        tracing::debug!(
            path = %path.display(),
            format = %format,
            columns = columns.len(),
            "Read header row"
        );
        Ok(columns)
    }
}

/// Reads the header row of a CSV or Excel file.
///
/// An unsupported extension is rejected without the file being read.
pub fn read_headers(path: &Path, delimiter: Option<Delimiter>) -> Result<ColumnSequence> {
    HeaderSource::new(path).with_delimiter(delimiter).read()
}
