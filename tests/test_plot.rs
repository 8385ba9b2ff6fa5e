//! Smoke tests for figure rendering

use cardioviz::pipeline::{
    categorical_counts, collect_counts, correlation_matrix, filter_outliers, preprocess,
};
use cardioviz::plot::{CatPlot, HeatMap};
use polars::prelude::*;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_catplot_saves_svg() {
    let df = preprocess(common::create_spread_dataframe()).unwrap();
    let counts = collect_counts(&categorical_counts(&df).unwrap()).unwrap();

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cat.svg");
    CatPlot::new(counts).save(&path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.len() > 500, "figure should contain drawn elements");
}

#[test]
fn test_catplot_handles_empty_counts() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cat.svg");
    CatPlot::new(Vec::new()).save(&path).unwrap();

    assert!(path.exists());
}

#[test]
fn test_heatmap_saves_svg() {
    let df = preprocess(common::create_spread_dataframe()).unwrap();
    let filtered = filter_outliers(&df).unwrap();
    let matrix = correlation_matrix(&filtered).unwrap();

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("heat.svg");
    HeatMap::new(matrix).save(&path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    // Annotations are one-decimal correlation values
    assert!(svg.contains("1.0") || svg.contains("0."));
}

#[test]
fn test_heatmap_tolerates_nan_cells() {
    // Constant columns produce NaN correlations; the figure must still render
    let df = df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0],
        "flat" => [7.0f64, 7.0, 7.0, 7.0],
        "b" => [4.0f64, 3.0, 2.0, 1.0],
    }
    .unwrap();
    let matrix = correlation_matrix(&df).unwrap();

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("heat.svg");
    HeatMap::new(matrix).save(&path).unwrap();

    assert!(path.exists());
}
