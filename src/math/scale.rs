//! Robust scale estimate derived from the least median of squared residuals.
//!
//! ## Design notes
//!
//! * **Formula**: `s = 1.4826 × (1 + 5 / (n − p)) × sqrt(median(r²))`.
//! * **Consistency**: 1.4826 makes `s` consistent for the standard deviation of
//!   Gaussian errors; `1 + 5 / (n − p)` is the small-sample correction.
//! * **Attributes**: `p` counts the target column, which matches the number of
//!   fitted parameters when an intercept is present.
//!
//! ## Invariants
//!
//! * `s >= 0` whenever the median is non-negative.
//! * `n <= p` is rejected rather than divided through.

use num_traits::Float;

use crate::primitives::errors::LmsError;

/// Gaussian consistency constant for the median of absolute residuals.
pub const GAUSSIAN_CONSISTENCY: f64 = 1.4826;

/// Numerator of the finite-sample correction `1 + 5 / (n − p)`.
pub const SMALL_SAMPLE_NUMERATOR: f64 = 5.0;

/// Compute the LMS scale estimate from the best median squared residual.
///
/// # Errors
///
/// `DegenerateScale` when `n_rows <= n_attributes`.
pub fn lms_scale<T: Float>(best_median: T, n_rows: usize, n_attributes: usize) -> Result<T, LmsError> {
    if n_rows <= n_attributes {
        return Err(LmsError::DegenerateScale {
            rows: n_rows,
            params: n_attributes,
        });
    }

    let dof = T::from(n_rows - n_attributes).unwrap();
    let correction = T::one() + T::from(SMALL_SAMPLE_NUMERATOR).unwrap() / dof;

    Ok(T::from(GAUSSIAN_CONSISTENCY).unwrap() * correction * best_median.sqrt())
}
