//! Set and order comparison of two header rows.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::columns::ColumnSequence;

/// Overall outcome of a header comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Same columns in the same order.
    Identical,
    /// Same columns, different order.
    Reordered,
    /// The column sets differ.
    Different,
}

/// Result of comparing a model header row against a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderComparison {
    /// Both files contain the same distinct column names.
    pub same_columns: bool,
    /// The rows are equal element for element. Only evaluated when
    /// `same_columns` holds; false otherwise.
    pub same_order: bool,
    /// Names in the model file that are absent from the new file.
    pub removed: Vec<String>,
    /// Names in the new file that are absent from the model file.
    pub added: Vec<String>,
    /// Names repeated within the model file.
    pub model_duplicates: Vec<String>,
    /// Names repeated within the new file.
    pub new_duplicates: Vec<String>,
}

impl HeaderComparison {
    pub fn verdict(&self) -> Verdict {
        match (self.same_columns, self.same_order) {
            (true, true) => Verdict::Identical,
            (true, false) => Verdict::Reordered,
            (false, _) => Verdict::Different,
        }
    }

    /// Returns true if the new file matches the model exactly.
    pub fn is_exact_match(&self) -> bool {
        self.verdict() == Verdict::Identical
    }

    pub fn has_duplicates(&self) -> bool {
        !self.model_duplicates.is_empty() || !self.new_duplicates.is_empty()
    }
}

/// Compares the header of a new file against the model file's header.
///
/// Set membership is exact and case-sensitive, so duplicate names collapse
/// and do not affect `same_columns`, `added` or `removed`. The order check
/// is plain list equality and does see duplicates.
pub fn compare_headers(model: &ColumnSequence, new: &ColumnSequence) -> HeaderComparison {
    let model_set = model.name_set();
    let new_set = new.name_set();
    let model_duplicates = model.duplicates();
    let new_duplicates = new.duplicates();

    if model_set == new_set {
        return HeaderComparison {
            same_columns: true,
            same_order: model.names() == new.names(),
            removed: Vec::new(),
            added: Vec::new(),
            model_duplicates,
            new_duplicates,
        };
    }

    HeaderComparison {
        same_columns: false,
        same_order: false,
        removed: missing_from(model, &new_set),
        added: missing_from(new, &model_set),
        model_duplicates,
        new_duplicates,
    }
}

/// Names of `source` not in `other`, deduplicated, in `source` order.
fn missing_from(source: &ColumnSequence, other: &BTreeSet<&str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut missing = Vec::new();
    for name in source {
        if !other.contains(name.as_str()) && seen.insert(name.as_str()) {
            missing.push(name.clone());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(names: &[&str]) -> ColumnSequence {
        names.iter().copied().collect()
    }

    #[test]
    fn test_identical_headers() {
        let comparison = compare_headers(&seq(&["A", "B", "C"]), &seq(&["A", "B", "C"]));
        assert_eq!(comparison.verdict(), Verdict::Identical);
        assert!(comparison.added.is_empty());
        assert!(comparison.removed.is_empty());
    }

    #[test]
    fn test_reordered_headers() {
        let comparison = compare_headers(&seq(&["A", "B", "C"]), &seq(&["C", "A", "B"]));
        assert!(comparison.same_columns);
        assert!(!comparison.same_order);
        assert_eq!(comparison.verdict(), Verdict::Reordered);
        assert!(comparison.added.is_empty());
        assert!(comparison.removed.is_empty());
    }

    #[test]
    fn test_removed_column() {
        let comparison = compare_headers(&seq(&["A", "B", "C"]), &seq(&["A", "C"]));
        assert_eq!(comparison.verdict(), Verdict::Different);
        assert_eq!(comparison.removed, vec!["B"]);
        assert!(comparison.added.is_empty());
        assert!(!comparison.same_order);
    }

    #[test]
    fn test_added_column() {
        let comparison = compare_headers(&seq(&["A", "B"]), &seq(&["A", "B", "D"]));
        assert!(comparison.removed.is_empty());
        assert_eq!(comparison.added, vec!["D"]);
    }

    #[test]
    fn test_empty_headers_match() {
        let comparison = compare_headers(&ColumnSequence::default(), &ColumnSequence::default());
        assert!(comparison.is_exact_match());
    }

    #[test]
    fn test_case_sensitive_names() {
        let comparison = compare_headers(&seq(&["Name"]), &seq(&["name"]));
        assert_eq!(comparison.removed, vec!["Name"]);
        assert_eq!(comparison.added, vec!["name"]);
    }

    #[test]
    fn test_duplicates_do_not_change_set_membership() {
        // Same distinct names, but the extra "A" breaks list equality.
        let comparison = compare_headers(&seq(&["A", "B"]), &seq(&["A", "B", "A"]));
        assert!(comparison.same_columns);
        assert!(!comparison.same_order);
        assert!(comparison.model_duplicates.is_empty());
        assert_eq!(comparison.new_duplicates, vec!["A"]);
    }

    #[test]
    fn test_differences_listed_once_in_file_order() {
        let comparison = compare_headers(&seq(&["Z", "A", "Z", "Y"]), &seq(&["A"]));
        assert_eq!(comparison.removed, vec!["Z", "Y"]);
    }
}
