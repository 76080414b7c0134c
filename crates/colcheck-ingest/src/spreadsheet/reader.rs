//! Header rows from `.xlsx` and `.xls` workbooks via calamine.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, DataRef, Reader, Xls, Xlsx, open_workbook};
use colcheck_model::ColumnSequence;

use crate::error::{IngestError, Result};

use super::row::HeaderRow;

/// Reads the first non-empty row of the first sheet of an `.xlsx` workbook.
///
/// The sheet is streamed and reading stops at the first cell past the
/// header row, so data rows are never loaded.
pub fn read_xlsx_headers(path: &Path) -> Result<ColumnSequence> {
    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|e| IngestError::unreadable(path, e))?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Ok(ColumnSequence::default());
    };

    let mut cells = workbook
        .worksheet_cells_reader(&sheet)
        .map_err(|e| IngestError::unreadable(path, e))?;
    let mut header_row = None;
    let mut row = HeaderRow::default();
    while let Some(cell) = cells
        .next_cell()
        .map_err(|e| IngestError::unreadable(path, e))?
    {
        let value = cell.get_value();
        if matches!(value, DataRef::Empty) {
            continue;
        }
        let (row_index, column) = cell.get_position();
        match header_row {
            None => header_row = Some(row_index),
            Some(index) if index != row_index => break,
            Some(_) => {}
        }
        row.push(column, Data::from(value.clone()).to_string());
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        row = ?header_row,
        "Read xlsx header row"
    );
    Ok(row.into_columns())
}

/// Reads the first non-empty row of the first sheet of an `.xls` workbook.
///
/// The legacy binary format has no streaming reader, so the sheet range is
/// built by calamine and only its first occupied row is used.
pub fn read_xls_headers(path: &Path) -> Result<ColumnSequence> {
    let mut workbook: Xls<BufReader<File>> =
        open_workbook(path).map_err(|e| IngestError::unreadable(path, e))?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(ColumnSequence::default());
    };
    let range = range.map_err(|e| IngestError::unreadable(path, e))?;
    let Some((_, first_column)) = range.start() else {
        return Ok(ColumnSequence::default());
    };

    for cells in range.rows() {
        let mut row = HeaderRow::default();
        for (offset, value) in (0u32..).zip(cells) {
            if !matches!(value, Data::Empty) {
                row.push(first_column + offset, value.to_string());
            }
        }
        if !row.is_empty() {
            return Ok(row.into_columns());
        }
    }
    Ok(ColumnSequence::default())
}
