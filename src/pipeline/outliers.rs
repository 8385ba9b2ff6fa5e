//! Row filtering for the heat-map pipeline

use anyhow::Result;
use polars::prelude::*;

use crate::pipeline::error::DatasetError;
use crate::pipeline::preprocess::ensure_columns;

/// Central band kept for height and weight, as quantiles.
pub const LOWER_QUANTILE: f64 = 0.025;
pub const UPPER_QUANTILE: f64 = 0.975;

/// Drop physiologically inconsistent and extreme-outlier rows.
///
/// Keeps rows where `ap_lo <= ap_hi` and where height and weight fall inside
/// the [2.5th, 97.5th] percentile band of their own column (bounds
/// inclusive). Both bands are computed on the unfiltered input, so the three
/// conjunctive conditions are order-independent.
pub fn filter_outliers(df: &DataFrame) -> Result<DataFrame> {
    ensure_columns(df, &["ap_hi", "ap_lo", "height", "weight"])?;
    if df.height() == 0 {
        return Err(DatasetError::Empty.into());
    }

    let (height_lo, height_hi) = quantile_band(df.column("height")?)?;
    let (weight_lo, weight_hi) = quantile_band(df.column("weight")?)?;

    let filtered = df
        .clone()
        .lazy()
        .filter(
            col("ap_lo")
                .lt_eq(col("ap_hi"))
                .and(col("height").cast(DataType::Float64).gt_eq(lit(height_lo)))
                .and(col("height").cast(DataType::Float64).lt_eq(lit(height_hi)))
                .and(col("weight").cast(DataType::Float64).gt_eq(lit(weight_lo)))
                .and(col("weight").cast(DataType::Float64).lt_eq(lit(weight_hi))),
        )
        .collect()?;

    Ok(filtered)
}

/// Lower and upper percentile bounds of a single column.
fn quantile_band(column: &Column) -> Result<(f64, f64)> {
    let casted = column.cast(&DataType::Float64)?;
    let ca = casted.f64()?;

    let mut values: Vec<f64> = ca.into_iter().flatten().collect();
    if values.is_empty() {
        return Err(DatasetError::NotNumeric(column.name().to_string()).into());
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok((
        quantile_linear(&values, LOWER_QUANTILE),
        quantile_linear(&values, UPPER_QUANTILE),
    ))
}

/// Linear-interpolation quantile over a sorted, non-empty slice
/// (interpolates between the two nearest order statistics).
pub fn quantile_linear(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
