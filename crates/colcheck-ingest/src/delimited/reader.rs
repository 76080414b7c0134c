//! CSV header row reading.

use std::path::Path;

use colcheck_model::ColumnSequence;
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::unnamed::name_blank_columns;

use super::delimiter::Delimiter;
use super::header::{recover_collapsed_header, strip_bom};

/// Reads the header record of a CSV file.
///
/// Uses `delimiter`, or a comma when none is given. When a delimiter was
/// supplied and the header parses as a single field that still contains
/// it, the field is re-split and its names trimmed. Blank names become
/// `Unnamed: N`. Only the first record is parsed; an empty file yields no
/// columns.
pub fn read_csv_headers(path: &Path, delimiter: Option<Delimiter>) -> Result<ColumnSequence> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter.unwrap_or_default().as_byte())
        .from_path(path)
        .map_err(|e| IngestError::unreadable(path, e))?;

    let record = reader
        .headers()
        .map_err(|e| IngestError::unreadable(path, e))?;
    let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
    strip_bom(&mut fields);

    if let Some(delimiter) = delimiter
        && let Some(recovered) = recover_collapsed_header(&fields, delimiter)
    {
        tracing::warn!(
            path = %path.display(),
            delimiter = %delimiter,
            columns = recovered.len(),
            "Header parsed as a single field; re-split on delimiter"
        );
        fields = recovered;
    }
    name_blank_columns(&mut fields);

    Ok(ColumnSequence::new(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_reads_only_header() {
        let file = create_temp_csv("A,B,C\n1,2,3\n4,5,6\n");
        let columns = read_csv_headers(file.path(), None).unwrap();
        assert_eq!(columns.names(), ["A", "B", "C"]);
    }

    #[test]
    fn test_header_names_are_verbatim() {
        let file = create_temp_csv(" A , B\n1,2\n");
        let columns = read_csv_headers(file.path(), None).unwrap();
        assert_eq!(columns.names(), [" A ", " B"]);
    }

    #[test]
    fn test_supplied_delimiter() {
        let file = create_temp_csv("Name;Age;City\nAna;31;Lisbon\n");
        let columns = read_csv_headers(file.path(), Some(Delimiter::SEMICOLON)).unwrap();
        assert_eq!(columns.names(), ["Name", "Age", "City"]);
    }

    #[test]
    fn test_recovers_quoted_collapsed_header() {
        let file = create_temp_csv("\"Name; Age ;City\"\n\"Ana;31;Lisbon\"\n");
        let columns = read_csv_headers(file.path(), Some(Delimiter::SEMICOLON)).unwrap();
        assert_eq!(columns.names(), ["Name", "Age", "City"]);
    }

    #[test]
    fn test_no_recovery_without_supplied_delimiter() {
        let file = create_temp_csv("Name;Age;City\nAna;31;Lisbon\n");
        let columns = read_csv_headers(file.path(), None).unwrap();
        assert_eq!(columns.names(), ["Name;Age;City"]);
    }

    #[test]
    fn test_quoted_fields_keep_embedded_commas() {
        let file = create_temp_csv("\"Last, First\",Age\n");
        let columns = read_csv_headers(file.path(), None).unwrap();
        assert_eq!(columns.names(), ["Last, First", "Age"]);
    }

    #[test]
    fn test_empty_file_has_no_columns() {
        let file = create_temp_csv("");
        let columns = read_csv_headers(file.path(), None).unwrap();
        assert!(columns.is_empty());
    }

    #[test]
    fn test_blank_header_fields_are_named_by_position() {
        let file = create_temp_csv("Id,,,Total\n1,2,3,4\n");
        let columns = read_csv_headers(file.path(), None).unwrap();
        assert_eq!(columns.names(), ["Id", "Unnamed: 1", "Unnamed: 2", "Total"]);
    }

    #[test]
    fn test_recovered_blank_names_are_named_by_position() {
        let file = create_temp_csv("\"A;;C\"\n");
        let columns = read_csv_headers(file.path(), Some(Delimiter::SEMICOLON)).unwrap();
        assert_eq!(columns.names(), ["A", "Unnamed: 1", "C"]);
    }

    #[test]
    fn test_strips_bom() {
        let file = create_temp_csv("\u{feff}A,B,C\n1,2,3\n");
        let columns = read_csv_headers(file.path(), None).unwrap();
        assert_eq!(columns.names(), ["A", "B", "C"]);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let result = read_csv_headers(Path::new("/nonexistent/base.csv"), None);
        assert!(matches!(result, Err(IngestError::UnreadableFile { .. })));
    }

    #[test]
    fn test_invalid_utf8_header_is_unreadable() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"A,\xff\xfe\n1,2\n").unwrap();
        let result = read_csv_headers(file.path(), None);
        assert!(matches!(result, Err(IngestError::UnreadableFile { .. })));
    }
}
