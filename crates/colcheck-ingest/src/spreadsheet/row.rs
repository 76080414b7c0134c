//! Assembly of a sparse header row into column order.

use std::collections::BTreeMap;

use colcheck_model::ColumnSequence;

use crate::unnamed::name_blank_columns;

/// Non-empty header cells keyed by their zero-based column index.
#[derive(Debug, Default)]
pub struct HeaderRow {
    cells: BTreeMap<u32, String>,
}

impl HeaderRow {
    pub fn push(&mut self, column: u32, text: String) {
        self.cells.insert(column, text);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Lays the cells out from the first to the last occupied column.
    /// Unoccupied columns in between are named `Unnamed: N`, where `N` is
    /// the position in the returned sequence.
    pub fn into_columns(mut self) -> ColumnSequence {
        let (Some(&first), Some(&last)) = (self.cells.keys().next(), self.cells.keys().next_back())
        else {
            return ColumnSequence::default();
        };
        let mut names: Vec<String> = (first..=last)
            .map(|column| self.cells.remove(&column).unwrap_or_default())
            .collect();
        name_blank_columns(&mut names);
        ColumnSequence::new(names)
    }
}
