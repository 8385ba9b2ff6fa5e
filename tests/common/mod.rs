//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Small examination table with known BMI and lab values.
///
/// BMI per row: 23.4, 24.2, 38.9 → overweight should come out [0, 0, 1].
pub fn create_examination_dataframe() -> DataFrame {
    df! {
        "id" => [0i64, 1, 2],
        "age" => [18300i64, 20400, 21900],
        "gender" => [1i64, 2, 1],
        "height" => [160i64, 170, 180],
        "weight" => [60.0f64, 70.0, 126.0],
        "ap_hi" => [120i64, 140, 130],
        "ap_lo" => [80i64, 90, 70],
        "cholesterol" => [1i64, 2, 3],
        "gluc" => [1i64, 1, 3],
        "smoke" => [0i64, 0, 1],
        "alco" => [0i64, 1, 0],
        "active" => [1i64, 1, 0],
        "cardio" => [0i64, 1, 1],
    }
    .unwrap()
}

/// 101-row table with a controlled spread of heights (140..=240) and weights
/// (50..=150), for the quantile filter tests.
///
/// The [2.5th, 97.5th] percentile band keeps heights 143..=237; row 50
/// additionally violates `ap_lo <= ap_hi`, so 94 rows survive the filters.
pub fn create_spread_dataframe() -> DataFrame {
    let n = 101i64;
    let id: Vec<i64> = (0..n).collect();
    let age: Vec<i64> = (0..n).map(|i| 18_000 + i * 10).collect();
    let gender: Vec<i64> = (0..n).map(|i| i % 2 + 1).collect();
    let height: Vec<i64> = (0..n).map(|i| 140 + i).collect();
    let weight: Vec<f64> = (0..n).map(|i| 50.0 + i as f64).collect();
    let ap_hi: Vec<i64> = vec![120; n as usize];
    let ap_lo: Vec<i64> = (0..n).map(|i| if i == 50 { 200 } else { 80 }).collect();
    let cholesterol: Vec<i64> = (0..n).map(|i| i % 3 + 1).collect();
    let gluc: Vec<i64> = (0..n).map(|i| (i + 1) % 3 + 1).collect();
    let smoke: Vec<i64> = (0..n).map(|i| i % 2).collect();
    let alco: Vec<i64> = (0..n).map(|i| i64::from(i % 3 == 0)).collect();
    let active: Vec<i64> = (0..n).map(|i| (i + 1) % 2).collect();
    let cardio: Vec<i64> = (0..n).map(|i| i % 2).collect();

    df! {
        "id" => id,
        "age" => age,
        "gender" => gender,
        "height" => height,
        "weight" => weight,
        "ap_hi" => ap_hi,
        "ap_lo" => ap_lo,
        "cholesterol" => cholesterol,
        "gluc" => gluc,
        "smoke" => smoke,
        "alco" => alco,
        "active" => active,
        "cardio" => cardio,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Extract a column as Vec<i64>, panicking on nulls
pub fn column_i64(df: &DataFrame, name: &str) -> Vec<i64> {
    df.column(name)
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}
