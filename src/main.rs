use anyhow::{Context, Result};
use knn_search::cli::parse_args;
use knn_search::report::SimilarityReport;
use knn_search::search::{load_labeled_dataset, KnnEngine};
use std::path::Path;

fn main() -> Result<()> {
    let cli_args = parse_args();

    println!("Loading dataset from: {}", cli_args.data_file);
    let dataset = load_labeled_dataset(Path::new(&cli_args.data_file))
        .with_context(|| format!("Failed to load dataset from '{}'", cli_args.data_file))?;
    println!(
        "Dataset loaded: {} rows, {} features.",
        dataset.row_count(),
        dataset.feature_count()
    );

    let engine = KnnEngine::new(&dataset)
        .with_context(|| "Failed to build nearest-neighbor engine from dataset")?;

    println!(
        "Searching for the {} rows most similar to '{}'...\n",
        cli_args.neighbors.min(engine.item_count()),
        cli_args.query_label
    );
    let neighbors = engine
        .search(&cli_args.query_label, cli_args.neighbors)
        .with_context(|| format!("Search for '{}' failed", cli_args.query_label))?;

    let report = SimilarityReport::new(&cli_args.query_label, neighbors);
    println!("{}", report.render(cli_args.format)?);

    Ok(())
}
