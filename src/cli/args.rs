//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Cardioviz - render categorical and correlation plots for the
/// cardiovascular examination dataset
#[derive(Parser, Debug)]
#[command(name = "cardioviz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long, default_value = "medical_examination.csv")]
    pub input: PathBuf,

    /// Output path for the categorical distribution plot (SVG)
    #[arg(long, default_value = "catplot.svg")]
    pub catplot: PathBuf,

    /// Output path for the correlation heat map (SVG)
    #[arg(long, default_value = "heatmap.svg")]
    pub heatmap: PathBuf,

    /// Write the counted categories and the correlation matrix to a JSON file
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for a full table scan (slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}
