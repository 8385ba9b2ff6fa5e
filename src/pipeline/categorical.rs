//! Categorical distribution pipeline: wide-to-long reshape, count, sort

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::preprocess::ensure_columns;

/// The six binary features shown in the categorical plot, in x-axis order.
pub const CATEGORICAL_FEATURES: [&str; 6] = [
    "active",
    "alco",
    "cholesterol",
    "gluc",
    "overweight",
    "smoke",
];

/// One counted (cardio, variable, value) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub cardio: i64,
    pub variable: String,
    pub value: i64,
    pub total: u32,
}

/// Reshape the preprocessed table to long form and count occurrences of
/// each (cardio, variable, value) triple into a `total` column.
///
/// The result is sorted ascending by (cardio, variable, value); combinations
/// that never occur produce no row rather than an explicit zero.
pub fn categorical_counts(df: &DataFrame) -> Result<DataFrame> {
    let mut required = vec!["cardio"];
    required.extend_from_slice(&CATEGORICAL_FEATURES);
    ensure_columns(df, &required)?;

    // Wide-to-long: one (cardio, variable, value) row per original
    // (row, feature) pair, six output rows per input row.
    let long_parts: Vec<LazyFrame> = CATEGORICAL_FEATURES
        .iter()
        .map(|feat| {
            df.clone().lazy().select([
                col("cardio").cast(DataType::Int64),
                lit(*feat).alias("variable"),
                col(*feat).cast(DataType::Int64).alias("value"),
            ])
        })
        .collect();

    let counts = concat(long_parts, UnionArgs::default())?
        .group_by([col("cardio"), col("variable"), col("value")])
        .agg([len().alias("total")])
        .sort(
            ["cardio", "variable", "value"],
            SortMultipleOptions::default(),
        )
        .collect()?;

    Ok(counts)
}

/// Materialize the counted table into typed rows for rendering and export.
pub fn collect_counts(counts: &DataFrame) -> Result<Vec<CategoryCount>> {
    let cardio = counts.column("cardio")?.i64()?;
    let variable = counts.column("variable")?.str()?;
    let value = counts.column("value")?.i64()?;
    let total = counts.column("total")?.u32()?;

    let mut rows = Vec::with_capacity(counts.height());
    for i in 0..counts.height() {
        let (Some(cardio), Some(variable), Some(value), Some(total)) = (
            cardio.get(i),
            variable.get(i),
            value.get(i),
            total.get(i),
        ) else {
            anyhow::bail!("null entry in counted categorical table at row {}", i);
        };
        rows.push(CategoryCount {
            cardio,
            variable: variable.to_string(),
            value,
            total,
        });
    }
    Ok(rows)
}
