//! Error types for header extraction.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while extracting a header row.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension is not one of the accepted formats.
    #[error(
        "unsupported file format: {path} (provide Excel (.xlsx, .xls) or CSV (.csv) files)"
    )]
    UnsupportedFormat { path: PathBuf },

    /// File exists but could not be opened or parsed.
    #[error("failed to read {path}: {reason}")]
    UnreadableFile { path: PathBuf, reason: String },

    /// Delimiter is not a single usable ASCII character.
    #[error("invalid delimiter '{value}': expected a single ASCII character")]
    InvalidDelimiter { value: String },
}

impl IngestError {
    pub(crate) fn unreadable(path: &Path, cause: impl Display) -> Self {
        Self::UnreadableFile {
            path: path.to_path_buf(),
            reason: cause.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_accepted_families() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("notes.txt"),
        };
        let message = err.to_string();
        assert!(message.contains("notes.txt"));
        assert!(message.contains("Excel (.xlsx, .xls) or CSV (.csv)"));
    }

    #[test]
    fn test_unreadable_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = IngestError::unreadable(Path::new("/data/base.csv"), cause);
        assert_eq!(err.to_string(), "failed to read /data/base.csv: access denied");
    }
}
