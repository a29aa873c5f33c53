pub mod data_loader;
pub mod knn_engine;
pub mod normalizer;

// Re-export key structs/functions for easier access from outside the search module
pub use data_loader::{load_labeled_dataset, LabeledDataset};
pub use knn_engine::{KnnEngine, Neighbor};
pub use normalizer::{normalize, NormalizedDataset};

use std::error::Error;
use std::fmt;

/// Errors raised by the search pipeline. All of them are detected eagerly,
/// before any distance computation, and mean the inputs are invalid rather
/// than that anything transient went wrong.
#[derive(Debug, PartialEq)]
pub enum SearchError {
    /// Dataset has no rows, or rows with no features.
    EmptyDataset,
    /// A row's feature count differs from the first row's.
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The query label does not appear in the dataset's labels.
    LabelNotFound(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyDataset => {
                write!(f, "Dataset is empty (needs at least one row and one feature)")
            }
            SearchError::ShapeMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} features, expected {}",
                row, found, expected
            ),
            SearchError::LabelNotFound(label) => {
                write!(f, "Query label not found in dataset: '{}'", label)
            }
        }
    }
}

impl Error for SearchError {}
