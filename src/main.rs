//! Cardioviz CLI
//!
//! Loads the cardiovascular examination dataset, derives the overweight
//! indicator and binarized lab values, and renders the categorical
//! distribution plot and the correlation heat map.

mod cli;
mod pipeline;
mod plot;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::Cli;
use pipeline::{
    categorical_counts, collect_counts, correlation_matrix, filter_outliers, load_dataset,
    preprocess,
};
use plot::{CatPlot, HeatMap};
use report::{export_analysis, ExportMetadata, RunSummary};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &cli.catplot, &cli.heatmap);

    // Step 1: Load and preprocess
    print_step_header(1, "Load & Preprocess");

    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let (raw, rows, cols, memory_mb) = load_dataset(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let df = preprocess(raw)?;
    print_success("Derived overweight, binarized cholesterol and gluc");

    let mut summary = RunSummary::new(rows);
    summary.load_time = step_start.elapsed();
    print_step_time(summary.load_time);

    // Step 2: Categorical distribution plot
    print_step_header(2, "Categorical Plot");

    let step_start = Instant::now();
    let spinner = create_spinner("Counting feature values...");
    let counts_df = categorical_counts(&df)?;
    let counts = collect_counts(&counts_df)?;
    finish_with_success(&spinner, "Feature values counted");
    print_count("counted (cardio, variable, value) triples", counts.len(), None);

    let catplot = CatPlot::new(counts.clone());
    catplot.save(&cli.catplot)?;
    print_success(&format!("Saved {}", cli.catplot.display()));

    summary.category_rows = counts.len();
    summary.saved_figures.push(cli.catplot.clone());
    summary.catplot_time = step_start.elapsed();
    print_step_time(summary.catplot_time);

    // Step 3: Correlation heat map
    print_step_header(3, "Correlation Heat Map");

    let step_start = Instant::now();
    let spinner = create_spinner("Filtering outlier rows...");
    let filtered = filter_outliers(&df)?;
    finish_with_success(&spinner, "Outlier rows dropped");
    print_count(
        "rows kept after filtering",
        filtered.height(),
        Some(&format!("(of {})", rows)),
    );

    let spinner = create_spinner("Computing correlation matrix...");
    let matrix = correlation_matrix(&filtered)?;
    finish_with_success(
        &spinner,
        &format!("Correlation matrix over {} columns", matrix.size()),
    );

    let heatmap = HeatMap::new(matrix);
    heatmap.save(&cli.heatmap)?;
    print_success(&format!("Saved {}", cli.heatmap.display()));

    summary.rows_after_filter = filtered.height();
    summary.saved_figures.push(cli.heatmap.clone());
    summary.heatmap_time = step_start.elapsed();
    print_step_time(summary.heatmap_time);

    // Optional JSON export
    if let Some(path) = &cli.export_json {
        let metadata = ExportMetadata::new(&cli.input, rows, filtered.height());
        export_analysis(path, metadata, &counts, heatmap.matrix())?;
        print_success(&format!("Exported analysis to {}", path.display()));
    }

    summary.display();
    print_completion();

    Ok(())
}
