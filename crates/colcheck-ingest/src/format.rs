//! File format detection by extension.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Tabular file formats with a readable header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Office Open XML workbook (`.xlsx`).
    Xlsx,
    /// Legacy binary workbook (`.xls`).
    Xls,
    /// Delimited text (`.csv`).
    Csv,
}

impl SourceFormat {
    /// Detects the format from the file extension, ignoring case.
    ///
    /// Only the path is inspected; the file is not opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("xlsx") => Ok(Self::Xlsx),
            Some("xls") => Ok(Self::Xls),
            Some("csv") => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn is_spreadsheet(self) -> bool {
        matches!(self, Self::Xlsx | Self::Xls)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}
