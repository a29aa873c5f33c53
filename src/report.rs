use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::search::Neighbor;

/// Final output of a run: the query label and its ranked neighbors,
/// nearest first.
#[derive(Debug, Serialize, Clone)]
pub struct SimilarityReport {
    pub query_label: String,
    pub neighbors: Vec<Neighbor>,
}

impl SimilarityReport {
    pub fn new(query_label: &str, neighbors: Vec<Neighbor>) -> Self {
        Self {
            query_label: query_label.to_string(),
            neighbors,
        }
    }

    /// Renders the report in the requested format. Text output is one label
    /// per line in ranked order; JSON carries the distances as well.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self
                .neighbors
                .iter()
                .map(|n| n.label.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .with_context(|| "Failed to serialize similarity report to JSON"),
        }
    }
}
