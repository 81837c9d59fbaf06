//! Error types for Least Median of Squares fitting.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate, from configuration validation through the
//! randomized search to prediction.
//!
//! ## Key concepts
//!
//! * **Configuration errors**: Rejected before any fitting starts; no partial model.
//! * **Fit errors**: A trial or refit subset whose design matrix is rank deficient.
//! * **Division edge case**: The scale estimate has no degrees of freedom left.
//! * **Not built**: Prediction was requested before a successful build.
//!
//! ## Non-goals
//!
//! * The empty inlier set is not an error; it is recovered by the executor.

use thiserror::Error;

/// Error type for LMS configuration, fitting and prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LmsError {
    /// The dataset has no rows.
    #[error("Input dataset is empty")]
    EmptyInput,

    /// Feature storage does not match `rows × features`.
    #[error("Length mismatch: {features_len} feature values for {rows} rows of {n_features} features")]
    MismatchedInputs {
        /// Number of stored feature values.
        features_len: usize,
        /// Number of rows (targets).
        rows: usize,
        /// Declared number of features per row.
        n_features: usize,
    },

    /// Too few rows to draw a subsample.
    #[error("Too few points: got {got}, need at least {min}")]
    TooFewPoints {
        /// Rows available.
        got: usize,
        /// Rows required.
        min: usize,
    },

    /// A value is infinite, negative where it must not be, or otherwise unusable.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Generic invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Subsample size must be at least one.
    #[error("Invalid subsample_size: {0} (must be at least 1)")]
    InvalidSubsampleSize(usize),

    /// Inlier cutoff must be finite and non-negative.
    #[error("Invalid cutoff: {0} (must be >= 0 and finite)")]
    InvalidCutoff(f64),

    /// Ridge penalty must be finite and non-negative.
    #[error("Invalid ridge penalty: {0} (must be >= 0 and finite)")]
    InvalidRidge(f64),

    /// A builder parameter was configured more than once.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },

    /// A prediction row has the wrong number of features.
    #[error("Dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch {
        /// Features the model was trained on.
        expected: usize,
        /// Features supplied.
        got: usize,
    },

    /// `combinations(n, r)` was asked for more items than exist.
    #[error("Invalid combination: cannot choose {r} from {n}")]
    CombinationDomain {
        /// Population size.
        n: usize,
        /// Items chosen.
        r: usize,
    },

    /// `combinations(n, r)` does not fit in a `u64`.
    #[error("Combination count overflows: choose {r} from {n}")]
    CombinationOverflow {
        /// Population size.
        n: usize,
        /// Items chosen.
        r: usize,
    },

    /// The design matrix of a subset is rank deficient.
    #[error("Singular subset: {rows} rows cannot determine {params} parameters")]
    SingularSubset {
        /// Rows in the subset.
        rows: usize,
        /// Parameters being fitted (features + intercept).
        params: usize,
    },

    /// Every search trial failed under the skip policy.
    #[error("No valid trial: all {trials} subsets were singular")]
    NoValidTrial {
        /// Trials attempted.
        trials: usize,
    },

    /// The scale estimate has no residual degrees of freedom.
    #[error("Degenerate scale: {rows} rows leave no degrees of freedom for {params} attributes")]
    DegenerateScale {
        /// Row count.
        rows: usize,
        /// Attribute count (features + target).
        params: usize,
    },

    /// The estimator has not completed a build.
    #[error("Model has not been built; call fit() first")]
    NotBuilt,
}
