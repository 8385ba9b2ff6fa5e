//! Preprocessing: derived overweight indicator and binarized lab values

use anyhow::Result;
use polars::prelude::*;

use crate::pipeline::error::DatasetError;

/// BMI above this value marks a row as overweight.
pub const BMI_OVERWEIGHT_THRESHOLD: f64 = 25.0;

/// Columns the preprocessing step requires in the raw table.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "id",
    "age",
    "gender",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
    "cardio",
];

/// Add the `overweight` column and binarize `cholesterol`/`gluc` in place.
///
/// `overweight` is 1 iff `weight / (height/100)^2 > 25`. The ordinal lab
/// values collapse to 1 iff the original level was above normal (> 1),
/// folding levels 2 and 3 together. `height > 0` is a data-quality
/// precondition of the source table and is not validated here.
pub fn preprocess(df: DataFrame) -> Result<DataFrame> {
    ensure_columns(&df, &REQUIRED_COLUMNS)?;

    let height_m = col("height").cast(DataType::Float64) / lit(100.0);
    let bmi = col("weight").cast(DataType::Float64) / (height_m.clone() * height_m);

    let out = df
        .lazy()
        .with_column(
            bmi.gt(lit(BMI_OVERWEIGHT_THRESHOLD))
                .cast(DataType::Int64)
                .alias("overweight"),
        )
        .with_columns([
            col("cholesterol")
                .gt(lit(1))
                .cast(DataType::Int64)
                .alias("cholesterol"),
            col("gluc").gt(lit(1)).cast(DataType::Int64).alias("gluc"),
        ])
        .collect()?;

    Ok(out)
}

/// Fail fast when a required column is absent.
pub fn ensure_columns(df: &DataFrame, required: &[&str]) -> Result<(), DatasetError> {
    let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
    for name in required {
        if !names.contains(name) {
            return Err(DatasetError::MissingColumn((*name).to_string()));
        }
    }
    Ok(())
}
