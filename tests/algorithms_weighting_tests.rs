#![cfg(feature = "dev")]
//! Tests for outlier weighting.
//!
//! ## Test Organization
//!
//! 1. **Standardization** - Ratio and the zero-scale rule
//! 2. **Weights** - Cutoff boundary and bulk weighting
//! 3. **From a Model** - Scale and weights from the best trial

use approx::assert_relative_eq;

use lms_rs::internals::algorithms::regression::LinearModel;
use lms_rs::internals::algorithms::weighting::OutlierWeighter;
use lms_rs::internals::math::scale::lms_scale;
use lms_rs::internals::primitives::dataset::Dataset;
use lms_rs::internals::primitives::errors::LmsError;

// ============================================================================
// Standardization Tests
// ============================================================================

/// Test the ratio for a positive scale.
#[test]
fn test_standardized_positive_scale() {
    assert_relative_eq!(OutlierWeighter::standardized(9.0f64, 2.0, 0.0), 1.5);
}

/// Test the zero-scale rule: exact residuals are inliers, anything else is infinitely far.
#[test]
fn test_standardized_zero_scale() {
    assert_eq!(OutlierWeighter::standardized(0.0f64, 0.0, 0.0), 0.0);
    assert!(OutlierWeighter::standardized(1e-12f64, 0.0, 0.0).is_infinite());

    let weighter = OutlierWeighter::<f64>::default();
    assert_eq!(weighter.weight(0.0, 0.0, 0.0), 1.0);
    assert_eq!(weighter.weight(1e-12, 0.0, 0.0), 0.0);
}

/// Test that round-off residuals count as exact fits when the scale is zero.
#[test]
fn test_standardized_zero_scale_round_off() {
    let tol = 1e-8;
    assert_eq!(OutlierWeighter::standardized(1e-30f64, 0.0, tol), 0.0);
    assert!(OutlierWeighter::standardized(1e-6f64, 0.0, tol).is_infinite());

    // A scale at round-off level is treated as zero.
    assert_eq!(OutlierWeighter::standardized(1e-30f64, 1e-15, tol), 0.0);
    assert!(OutlierWeighter::standardized(1.0f64, 1e-15, tol).is_infinite());
}

/// Test the round-off level derived from the targets.
#[test]
fn test_round_off_tolerance() {
    let tol = OutlierWeighter::round_off_tolerance(&[1.0f64, -1000.0, 3.0]);
    assert_relative_eq!(tol, 1000.0 * f64::EPSILON.sqrt(), epsilon = 1e-20);
    assert_eq!(OutlierWeighter::round_off_tolerance(&[0.0f64, 0.0]), 0.0);
}

// ============================================================================
// Weight Tests
// ============================================================================

/// Test the default cutoff and the strict inequality at the boundary.
#[test]
fn test_weight_cutoff_boundary() {
    let weighter = OutlierWeighter::<f64>::default();
    assert_eq!(weighter.cutoff(), 2.5);

    // sqrt(6.25) / 1 == 2.5 is not below the cutoff.
    assert_eq!(weighter.weight(6.25, 1.0, 0.0), 0.0);
    assert_eq!(weighter.weight(6.2, 1.0, 0.0), 1.0);
}

/// Test weighting a residual vector.
#[test]
fn test_weigh_many() {
    let weighter = OutlierWeighter::new(2.0f64);
    let result = weighter.weigh(&[0.0, 1.0, 3.9, 4.0, 100.0], 1.0, 0.0);

    assert_eq!(result.weights, vec![1.0, 1.0, 1.0, 0.0, 0.0]);
    assert_eq!(result.inliers, vec![0, 1, 2]);
    assert_eq!(result.n_outliers(), 2);
    assert_eq!(result.scale, 1.0);
}

/// Test that a zero cutoff rejects every row.
#[test]
fn test_weigh_zero_cutoff() {
    let weighter = OutlierWeighter::new(0.0f64);
    let result = weighter.weigh(&[0.0, 1.0], 1.0, 0.0);
    assert!(result.inliers.is_empty());
    assert_eq!(result.weights, vec![0.0, 0.0]);
}

// ============================================================================
// Model-based Tests
// ============================================================================

/// Test weights computed from a best model and its median.
#[test]
fn test_compute_weights_flags_outlier() {
    let x: Vec<[f64; 1]> = (0..10).map(|i| [i as f64]).collect();
    let mut y: Vec<f64> = (0..10).map(|i| i as f64 + if i % 2 == 0 { 0.1 } else { -0.1 }).collect();
    y[7] = 50.0;
    let data = Dataset::from_rows(&x, &y).unwrap();

    let model = LinearModel::new(0.0, vec![1.0]);
    let weighter = OutlierWeighter::<f64>::default();
    let weighting = weighter.compute_weights(&model, 0.01, &data).unwrap();

    // 1.4826 * (1 + 5/8) * 0.1
    assert_relative_eq!(weighting.scale, 1.4826 * 1.625 * 0.1, epsilon = 1e-12);
    assert_eq!(weighting.weights[7], 0.0);
    assert_eq!(weighting.inliers.len(), 9);
}

/// Test that weights fail when there are no residual degrees of freedom.
#[test]
fn test_compute_weights_degenerate_scale() {
    let data = Dataset::from_rows(&[[0.0], [1.0]], &[0.0, 1.0]).unwrap();
    let model = LinearModel::new(0.0, vec![1.0]);
    let weighter = OutlierWeighter::<f64>::default();

    assert_eq!(
        weighter.compute_weights(&model, 0.0, &data).unwrap_err(),
        LmsError::DegenerateScale { rows: 2, params: 2 }
    );
}

/// Test that the median-rank row is always an inlier under the default cutoff.
#[test]
fn test_default_cutoff_keeps_median_row() {
    let weighter = OutlierWeighter::<f64>::default();

    for n in [3usize, 4, 7, 20, 101] {
        // Half the rows are far off, the rest spread up to the median.
        let residuals: Vec<f64> = (0..n)
            .map(|i| if i <= n / 2 { (i as f64 + 1.0).powi(2) } else { 1e12 })
            .collect();
        let median = ((n / 2) as f64 + 1.0).powi(2);
        let scale = lms_scale(median, n, 2).unwrap();

        let result = weighter.weigh(&residuals, scale, 0.0);
        assert!(result.weights[n / 2] > 0.0, "n={n}");
        assert!(!result.inliers.is_empty());
    }
}
