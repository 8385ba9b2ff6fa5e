//! Unit tests for the preprocessing step

use cardioviz::pipeline::preprocess;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_overweight_from_bmi() {
    // BMI = [23.4, 24.2, 38.9], only the last exceeds 25
    let df = preprocess(common::create_examination_dataframe()).unwrap();

    assert_eq!(common::column_i64(&df, "overweight"), vec![0, 0, 1]);
}

#[test]
fn test_cholesterol_binarized() {
    let df = preprocess(common::create_examination_dataframe()).unwrap();

    // Input [1, 2, 3]: above-normal levels collapse to 1
    assert_eq!(common::column_i64(&df, "cholesterol"), vec![0, 1, 1]);
}

#[test]
fn test_gluc_binarized() {
    let df = preprocess(common::create_examination_dataframe()).unwrap();

    // Input [1, 1, 3]
    assert_eq!(common::column_i64(&df, "gluc"), vec![0, 0, 1]);
}

#[test]
fn test_overweight_is_binary_and_matches_bmi_rule() {
    let raw = common::create_spread_dataframe();
    let heights = common::column_i64(&raw, "height");
    let weights: Vec<f64> = raw
        .column("weight")
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .collect();

    let df = preprocess(raw).unwrap();
    let overweight = common::column_i64(&df, "overweight");

    for ((h, w), ow) in heights.iter().zip(&weights).zip(&overweight) {
        assert!(*ow == 0 || *ow == 1, "overweight must be binary, got {}", ow);
        let bmi = w / (*h as f64 / 100.0).powi(2);
        let expected = i64::from(bmi > 25.0);
        assert_eq!(
            *ow, expected,
            "overweight mismatch for height={} weight={} (BMI {:.2})",
            h, w, bmi
        );
    }
}

#[test]
fn test_original_columns_preserved() {
    let df = preprocess(common::create_examination_dataframe()).unwrap();

    for col in [
        "id", "age", "gender", "height", "weight", "ap_hi", "ap_lo", "cholesterol", "gluc",
        "smoke", "alco", "active", "cardio", "overweight",
    ] {
        assert!(
            df.get_column_names().iter().any(|c| c.as_str() == col),
            "column '{}' missing after preprocessing",
            col
        );
    }

    // Untouched columns keep their values
    assert_eq!(common::column_i64(&df, "height"), vec![160, 170, 180]);
    assert_eq!(common::column_i64(&df, "cardio"), vec![0, 1, 1]);
}

#[test]
fn test_missing_column_fails_fast() {
    let df = common::create_examination_dataframe()
        .drop("weight")
        .unwrap();

    let err = preprocess(df).unwrap_err();
    assert!(
        err.to_string().contains("weight"),
        "error should name the missing column, got: {}",
        err
    );
}
