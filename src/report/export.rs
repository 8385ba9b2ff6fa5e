//! JSON export of the counted categories and the correlation matrix

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CategoryCount, CorrelationMatrix};

/// Metadata about the run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Cardioviz version
    pub cardioviz_version: String,
    /// Input file path
    pub input_file: String,
    /// Rows in the loaded dataset
    pub rows_loaded: usize,
    /// Rows remaining after the heat-map filters
    pub rows_after_filter: usize,
}

impl ExportMetadata {
    pub fn new(input_file: &Path, rows_loaded: usize, rows_after_filter: usize) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            cardioviz_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            rows_loaded,
            rows_after_filter,
        }
    }
}

/// Correlation matrix with its column order
#[derive(Serialize)]
pub struct CorrelationExport {
    pub columns: Vec<String>,
    /// Row-major matrix; NaN entries serialize as null
    pub matrix: Vec<Vec<f64>>,
}

/// Complete analysis export
#[derive(Serialize)]
pub struct AnalysisExport {
    pub metadata: ExportMetadata,
    pub categorical_counts: Vec<CategoryCount>,
    pub correlation: CorrelationExport,
}

/// Write the analysis artifacts as pretty-printed JSON.
pub fn export_analysis(
    path: &Path,
    metadata: ExportMetadata,
    counts: &[CategoryCount],
    matrix: &CorrelationMatrix,
) -> Result<()> {
    let export = AnalysisExport {
        metadata,
        categorical_counts: counts.to_vec(),
        correlation: CorrelationExport {
            columns: matrix.columns.clone(),
            matrix: matrix.to_rows(),
        },
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize analysis export")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write analysis export: {}", path.display()))?;

    Ok(())
}
