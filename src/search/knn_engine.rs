use serde::Serialize;

use crate::search::data_loader::LabeledDataset;
use crate::search::normalizer::{normalize, NormalizedDataset};
use crate::search::SearchError;

/// One ranked search result: a row's label and its Euclidean distance from
/// the query row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub label: String,
    pub distance: f64,
}

/// Exact K-nearest-neighbor search over a normalized in-memory dataset.
///
/// Normalization happens once, at construction, so repeated queries against
/// the same dataset never redo it. The engine holds no mutable state after
/// construction; `search` takes `&self` and is safe to call from multiple
/// threads if the engine is shared.
pub struct KnnEngine {
    labels: Vec<String>,
    normalized: NormalizedDataset,
}

impl KnnEngine {
    pub fn new(dataset: &LabeledDataset) -> Result<Self, SearchError> {
        let normalized = normalize(dataset)?;
        Ok(Self {
            labels: dataset.labels.clone(),
            normalized,
        })
    }

    pub fn item_count(&self) -> usize {
        self.normalized.row_count()
    }

    /// Returns the `k` rows nearest to the row labeled `query_label`, closest
    /// first. The query row is resolved to the FIRST row carrying that label;
    /// a missing label is an error, never silently defaulted.
    ///
    /// `k` is clamped to the number of rows, and `k == 0` yields an empty
    /// result. The query row itself always appears in the results with
    /// distance 0; callers that want neighbors excluding the query must
    /// filter it out themselves.
    ///
    /// Ties in distance keep the rows' original input order (the sort is
    /// stable). Distances are compared with `f64::total_cmp`, so a NaN
    /// distance (possible only if the input data contained NaN) orders after
    /// every real distance.
    pub fn search(&self, query_label: &str, k: usize) -> Result<Vec<Neighbor>, SearchError> {
        let query_index = self
            .labels
            .iter()
            .position(|label| label == query_label)
            .ok_or_else(|| SearchError::LabelNotFound(query_label.to_string()))?;

        let effective_k = k.min(self.normalized.row_count());
        let query_row = &self.normalized.rows[query_index];

        let mut ranked: Vec<(usize, f64)> = self
            .normalized
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i, euclidean_distance(row, query_row)))
            .collect();
        ranked.sort_by(|(_, a), (_, b)| a.total_cmp(b));

        Ok(ranked
            .into_iter()
            .take(effective_k)
            .map(|(i, distance)| Neighbor {
                label: self.labels[i].clone(),
                distance,
            })
            .collect())
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
