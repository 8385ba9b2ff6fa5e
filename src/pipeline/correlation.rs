//! Pearson correlation matrix over the numeric columns

use anyhow::Result;
use faer::Mat;
use polars::prelude::*;
use rayon::prelude::*;

use crate::pipeline::error::DatasetError;

/// Square Pearson correlation matrix with the dataset's column order
/// preserved. Constant and all-null columns keep their slot and show up as
/// NaN rows/columns instead of being dropped.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    values: Mat<f64>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[(row, col)]
    }

    /// Cells of the strictly-lower triangle. The upper triangle and the
    /// diagonal stay masked in the rendered heat map.
    pub fn lower_triangle_cells(&self) -> Vec<(usize, usize, f64)> {
        let n = self.size();
        let mut cells = Vec::with_capacity(n.saturating_sub(1) * n / 2);
        for i in 0..n {
            for j in 0..i {
                cells.push((i, j, self.values[(i, j)]));
            }
        }
        cells
    }

    /// Full matrix as nested rows, for the JSON export.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        let n = self.size();
        (0..n)
            .map(|i| (0..n).map(|j| self.values[(i, j)]).collect())
            .collect()
    }
}

/// Compute the pairwise Pearson correlation matrix over all numeric columns.
///
/// Algorithm:
/// 1. Cast numeric columns to Float64.
/// 2. Standardize each column: `(x - mean) / std`, scaled by `1/sqrt(n)`.
/// 3. `R = Z^T * Z`, which is the correlation matrix for the scaled Z.
///
/// Standardization runs in parallel via Rayon. The result is exactly
/// symmetric and has 1.0 on the diagonal for every non-constant column.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let numeric: Vec<(String, Column)> = df
        .get_columns()
        .iter()
        .filter(|c| c.dtype().is_primitive_numeric())
        .filter_map(|c| {
            c.cast(&DataType::Float64)
                .ok()
                .map(|casted| (c.name().to_string(), casted))
        })
        .collect();

    if numeric.len() < 2 {
        anyhow::bail!("correlation matrix needs at least two numeric columns");
    }

    let n_rows = numeric[0].1.len();
    if n_rows == 0 {
        return Err(DatasetError::Empty.into());
    }

    let standardized: Vec<Option<Vec<f64>>> =
        numeric.par_iter().map(|(_, col)| standardize(col)).collect();

    let valid: Vec<(usize, &Vec<f64>)> = standardized
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.as_ref().map(|v| (i, v)))
        .collect();

    let mut z = Mat::<f64>::zeros(n_rows, valid.len());
    for (k, (_, col_data)) in valid.iter().enumerate() {
        for (r, &v) in col_data.iter().enumerate() {
            z[(r, k)] = v;
        }
    }
    let r_small = z.transpose() * &z;

    let n = numeric.len();
    let mut values = Mat::<f64>::from_fn(n, n, |_, _| f64::NAN);
    for (ki, (i, _)) in valid.iter().enumerate() {
        values[(*i, *i)] = 1.0;
        for (kj, (j, _)) in valid.iter().enumerate().skip(ki + 1) {
            let v = r_small[(ki, kj)];
            values[(*i, *j)] = v;
            values[(*j, *i)] = v;
        }
    }

    Ok(CorrelationMatrix {
        columns: numeric.into_iter().map(|(name, _)| name).collect(),
        values,
    })
}

/// Standardize a Float64 column to zero mean and unit variance, scaled by
/// `1/sqrt(n)`. Returns None for constant or all-null columns; nulls
/// contribute 0 after standardization.
fn standardize(col: &Column) -> Option<Vec<f64>> {
    let ca = col.f64().ok()?;

    let mut sum = 0.0;
    let mut count = 0usize;
    for v in ca.into_iter().flatten() {
        sum += v;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let mean = sum / count as f64;

    let mut sq_dev = 0.0;
    for v in ca.into_iter().flatten() {
        let d = v - mean;
        sq_dev += d * d;
    }
    // Population variance, consistent across both factors of Z^T * Z
    let std = (sq_dev / count as f64).sqrt();
    if std == 0.0 {
        return None;
    }

    let scale = 1.0 / (count as f64).sqrt();
    Some(
        ca.into_iter()
            .map(|v| v.map_or(0.0, |x| scale * (x - mean) / std))
            .collect(),
    )
}
