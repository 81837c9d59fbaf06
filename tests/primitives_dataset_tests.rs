#![cfg(feature = "dev")]
//! Tests for the in-memory regression dataset.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Buffers, rows, and shape errors
//! 2. **Weights and Names** - Optional row weights and feature names
//! 3. **Accessors** - Row access and missing-value detection
//! 4. **Subsets** - Index-based selection

use lms_rs::internals::primitives::dataset::Dataset;
use lms_rs::internals::primitives::errors::LmsError;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test construction from a row-major buffer.
#[test]
fn test_dataset_new_row_major() {
    let data = Dataset::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![10.0, 20.0, 30.0], 2)
        .expect("valid shape");

    assert_eq!(data.n_rows(), 3);
    assert_eq!(data.n_features(), 2);
    assert_eq!(data.n_attributes(), 3);
    assert_eq!(data.row(1), &[3.0, 4.0]);
    assert_eq!(data.value(2, 1), 6.0);
    assert_eq!(data.target(2), 30.0);
    assert_eq!(data.weights(), &[1.0, 1.0, 1.0]);
    assert!(data.is_numeric_target());
}

/// Test that a buffer of the wrong length is rejected.
#[test]
fn test_dataset_new_mismatched() {
    let result = Dataset::new(vec![1.0f64, 2.0, 3.0], vec![1.0, 2.0], 2);
    assert_eq!(
        result.unwrap_err(),
        LmsError::MismatchedInputs {
            features_len: 3,
            rows: 2,
            n_features: 2
        }
    );
}

/// Test construction from feature rows.
#[test]
fn test_dataset_from_rows() {
    let rows = [[1.0, 2.0], [3.0, 4.0]];
    let data = Dataset::from_rows(&rows, &[5.0, 6.0]).expect("valid rows");

    assert_eq!(data.features(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(data.targets(), &[5.0, 6.0]);
}

/// Test that ragged rows are rejected.
#[test]
fn test_dataset_from_rows_ragged() {
    let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
    let result = Dataset::from_rows(&rows, &[1.0, 2.0]);
    assert_eq!(
        result.unwrap_err(),
        LmsError::DimensionMismatch {
            expected: 2,
            got: 1
        }
    );
}

/// Test that an empty dataset can be constructed (and is rejected later).
#[test]
fn test_dataset_empty() {
    let rows: Vec<[f64; 1]> = Vec::new();
    let data = Dataset::from_rows(&rows, &[]).expect("empty is structurally valid");
    assert!(data.is_empty());
    assert_eq!(data.n_rows(), 0);
}

// ============================================================================
// Weights and Names Tests
// ============================================================================

/// Test attaching row weights.
#[test]
fn test_dataset_with_weights() {
    let data = Dataset::from_rows(&[[1.0], [2.0]], &[1.0, 2.0])
        .unwrap()
        .with_weights(vec![0.5, 2.0])
        .expect("valid weights");
    assert_eq!(data.weight(0), 0.5);
    assert_eq!(data.weight(1), 2.0);
}

/// Test that negative, infinite, or miscounted weights are rejected.
#[test]
fn test_dataset_with_invalid_weights() {
    let data = Dataset::from_rows(&[[1.0], [2.0]], &[1.0, 2.0]).unwrap();

    assert!(matches!(
        data.clone().with_weights(vec![1.0, -1.0]),
        Err(LmsError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        data.clone().with_weights(vec![1.0, f64::INFINITY]),
        Err(LmsError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        data.with_weights(vec![1.0]),
        Err(LmsError::InvalidInput(_))
    ));
}

/// Test feature names and their defaults.
#[test]
fn test_dataset_feature_names() {
    let data = Dataset::from_rows(&[[1.0, 2.0]], &[3.0]).unwrap();
    assert_eq!(data.feature_name(0), "x1");
    assert_eq!(data.feature_name(1), "x2");
    assert!(data.feature_names().is_none());

    let named = data.clone().with_feature_names(["age", "dose"]).unwrap();
    assert_eq!(named.feature_name(1), "dose");

    assert!(matches!(
        data.with_feature_names(["only_one"]),
        Err(LmsError::DimensionMismatch { expected: 2, got: 1 })
    ));
}

// ============================================================================
// Accessor and Subset Tests
// ============================================================================

/// Test missing-value detection per row.
#[test]
fn test_dataset_has_missing() {
    let data = Dataset::from_rows(&[[1.0], [f64::NAN], [3.0]], &[1.0, 2.0, f64::NAN]).unwrap();
    assert!(!data.has_missing(0));
    assert!(data.has_missing(1));
    assert!(data.has_missing(2));
}

/// Test selecting rows by index keeps order, weights, and names.
#[test]
fn test_dataset_select_by_indices() {
    let data = Dataset::from_rows(&[[1.0], [2.0], [3.0], [4.0]], &[10.0, 20.0, 30.0, 40.0])
        .unwrap()
        .with_weights(vec![1.0, 2.0, 3.0, 4.0])
        .unwrap()
        .with_feature_names(["dose"])
        .unwrap();

    let subset = data.select_by_indices(&[3, 0]);
    assert_eq!(subset.n_rows(), 2);
    assert_eq!(subset.features(), &[4.0, 1.0]);
    assert_eq!(subset.targets(), &[40.0, 10.0]);
    assert_eq!(subset.weights(), &[4.0, 1.0]);
    assert_eq!(subset.feature_name(0), "dose");
}
