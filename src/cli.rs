use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One label per line, nearest first
    Text,
    /// Pretty-printed JSON report with labels and distances
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV data file (header row, then label followed by numeric features)
    #[arg(short, long)]
    pub data_file: String,

    /// Label of the row to use as the query vector
    #[arg(short, long, default_value = "California")]
    pub query_label: String,

    /// Number of nearest neighbors to return (clamped to the dataset size)
    #[arg(short = 'k', long, default_value_t = 10)]
    pub neighbors: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
