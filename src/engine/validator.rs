//! Input validation for LMS configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for LMS configuration
//! parameters and input datasets. It checks parameter bounds, finite
//! values and the minimum row count before any fitting starts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Subsample size ≥ 1, cutoff and ridge penalty finite and ≥ 0.
//! * **Finite Checks**: Infinite values are rejected; NaN marks a missing value
//!   and is left to the preprocessing step.
//! * **Sampling Requirement**: At least `subsample_size` rows after preprocessing.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not impute, drop or otherwise transform data.

use num_traits::Float;

use crate::algorithms::regression::SolverMethod;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LmsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for LMS configuration and input data.
///
/// All methods return `Result<(), LmsError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a raw dataset before preprocessing.
    ///
    /// NaN values are allowed here (missing values); infinities are not.
    pub fn validate_dataset<T: Float>(data: &Dataset<T>) -> Result<(), LmsError> {
        if data.is_empty() {
            return Err(LmsError::EmptyInput);
        }

        for (i, &val) in data.features().iter().enumerate() {
            if val.is_infinite() {
                let n_features = data.n_features();
                return Err(LmsError::InvalidNumericValue(format!(
                    "x[{}][{}]={}",
                    i / n_features,
                    i % n_features,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in data.targets().iter().enumerate() {
            if val.is_infinite() {
                return Err(LmsError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that enough rows remain to draw one subsample.
    pub fn validate_row_count(n_rows: usize, subsample_size: usize) -> Result<(), LmsError> {
        if n_rows == 0 {
            return Err(LmsError::EmptyInput);
        }
        if n_rows < subsample_size {
            return Err(LmsError::TooFewPoints {
                got: n_rows,
                min: subsample_size,
            });
        }
        Ok(())
    }

    /// Validate the feature count of a prediction row.
    pub fn validate_row_dimension(expected: usize, got: usize) -> Result<(), LmsError> {
        if expected != got {
            return Err(LmsError::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the subsample size.
    pub fn validate_subsample_size(subsample_size: usize) -> Result<(), LmsError> {
        if subsample_size == 0 {
            return Err(LmsError::InvalidSubsampleSize(subsample_size));
        }
        Ok(())
    }

    /// Validate the standardized-residual cutoff.
    pub fn validate_cutoff<T: Float>(cutoff: T) -> Result<(), LmsError> {
        if !cutoff.is_finite() || cutoff < T::zero() {
            return Err(LmsError::InvalidCutoff(cutoff.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the solver configuration.
    pub fn validate_solver<T: Float>(solver: &SolverMethod<T>) -> Result<(), LmsError> {
        if let SolverMethod::Ridge(lambda) = *solver {
            if !lambda.is_finite() || lambda < T::zero() {
                return Err(LmsError::InvalidRidge(lambda.to_f64().unwrap_or(f64::NAN)));
            }
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LmsError> {
        if let Some(param) = duplicate_param {
            return Err(LmsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
