//! Ordered column names of a header row.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Ordered column names taken from a file's first row.
///
/// The order is the physical column order of the file. Names are kept
/// verbatim, duplicates included; [`ColumnSequence::name_set`] gives the
/// order-insensitive view used for membership checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSequence {
    names: Vec<String>,
}

impl ColumnSequence {
    /// Creates a sequence from names in file order.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Returns the names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of columns, duplicates included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the header row has no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Distinct names, without order.
    pub fn name_set(&self) -> BTreeSet<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Names that occur more than once, each listed once in order of first
    /// appearance.
    pub fn duplicates(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut reported = BTreeSet::new();
        let mut duplicates = Vec::new();
        for name in &self.names {
            if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
                duplicates.push(name.clone());
            }
        }
        duplicates
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a ColumnSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
