use crate::search::data_loader::LabeledDataset;
use crate::search::SearchError;

/// A dataset rescaled so that every column's maximum absolute value is 1.0.
/// Same shape as the input it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDataset {
    pub rows: Vec<Vec<f64>>,
}

impl NormalizedDataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn feature_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }
}

/// Rescales each column of the dataset independently by its maximum absolute
/// value, so every value lands in [-1, 1]. Columns that are entirely zero are
/// left untouched (dividing by their max would poison every downstream
/// distance with NaN); such columns are flagged with a warning but never fail
/// the run.
///
/// Validates shape before computing anything: an empty dataset, zero-width
/// rows, or rows of differing lengths are rejected up front.
pub fn normalize(dataset: &LabeledDataset) -> Result<NormalizedDataset, SearchError> {
    let rows = &dataset.rows;
    if rows.is_empty() || rows[0].is_empty() {
        return Err(SearchError::EmptyDataset);
    }
    let cols = rows[0].len();
    for (row_index, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(SearchError::ShapeMismatch {
                row: row_index,
                expected: cols,
                found: row.len(),
            });
        }
    }

    let mut normalized: Vec<Vec<f64>> = rows.clone();
    for col in 0..cols {
        let max_abs = rows
            .iter()
            .map(|row| row[col].abs())
            .fold(0.0_f64, f64::max);
        if max_abs > 0.0 {
            for row in normalized.iter_mut() {
                row[col] /= max_abs;
            }
        } else {
            eprintln!(
                "[WARNING] Column {} is all zeros and was left unnormalized.",
                col
            );
        }
    }

    Ok(NormalizedDataset { rows: normalized })
}
