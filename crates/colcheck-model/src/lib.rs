//! Column header model for colcheck.
//!
//! A [`ColumnSequence`] is the ordered header row of one tabular file. Two
//! sequences are compared with [`compare_headers`], which yields a
//! [`HeaderComparison`] describing whether the column sets and their order
//! agree, and which names were added or removed.
//!
//! # Example
//!
//! ```
//! use colcheck_model::{ColumnSequence, Verdict, compare_headers};
//!
//! let model = ColumnSequence::from_iter(["A", "B", "C"]);
//! let new = ColumnSequence::from_iter(["A", "C"]);
//!
//! let comparison = compare_headers(&model, &new);
//! assert_eq!(comparison.verdict(), Verdict::Different);
//! assert_eq!(comparison.removed, vec!["B".to_string()]);
//! assert!(comparison.added.is_empty());
//! ```

pub mod columns;
pub mod comparison;

pub use columns::ColumnSequence;
pub use comparison::{HeaderComparison, Verdict, compare_headers};
