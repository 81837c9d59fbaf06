//! Binary inlier/outlier weights from the LMS scale estimate.
//!
//! ## Purpose
//!
//! After the search, the best model's residuals are standardized by the
//! robust scale and every row is either kept (weight 1) or rejected
//! (weight 0) for the final refit.
//!
//! ## Design notes
//!
//! * **Rule**: Hard threshold, `w_i = 1` iff `sqrt(r_i) / s < c` with `c = 2.5`.
//! * **Zero scale**: When `s` is at round-off level (`sqrt(ε) · max|y|` or
//!   below) the ratio is defined as 0 for a residual within that level and
//!   `+∞` otherwise, so only rows the best model fits exactly stay inliers.
//! * **Median row**: The row at the median rank always has ratio
//!   `1 / (1.4826 · (1 + 5/(n − p))) < 1`, so with any cutoff of 1 or more the
//!   inlier set is never empty. The empty-inlier fallback is only reachable
//!   with a cutoff below that ratio (e.g. `cutoff(0.0)`).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Weights are exactly 0 or 1.
//! * `inliers` lists the rows with weight 1 in ascending order.
//!
//! ## Non-goals
//!
//! * This module does not refit; dropped rows are removed, not down-weighted.

use crate::algorithms::regression::LinearModel;
use crate::algorithms::residuals::ResidualScorer;
use crate::math::linalg::FloatLinalg;
use crate::math::scale::lms_scale;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LmsError;

/// Result of the weighting step.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighting<T> {
    /// Robust scale estimate.
    pub scale: T,

    /// Round-off level below which residuals and the scale count as zero.
    pub tolerance: T,

    /// Per-row weight in {0, 1}.
    pub weights: Vec<T>,

    /// Rows with weight 1.
    pub inliers: Vec<usize>,
}

impl<T> Weighting<T> {
    /// Number of rows with weight 0.
    pub fn n_outliers(&self) -> usize {
        self.weights.len() - self.inliers.len()
    }
}

/// Assigns inlier weights against a cutoff on standardized residuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierWeighter<T> {
    cutoff: T,
}

impl<T: FloatLinalg> Default for OutlierWeighter<T> {
    fn default() -> Self {
        Self::new(T::from(Self::DEFAULT_CUTOFF).unwrap())
    }
}

impl<T: FloatLinalg> OutlierWeighter<T> {
    /// Standardized residual cutoff.
    pub const DEFAULT_CUTOFF: f64 = 2.5;

    /// Create a weighter with an explicit cutoff.
    pub fn new(cutoff: T) -> Self {
        Self { cutoff }
    }

    /// Configured cutoff.
    #[inline]
    pub fn cutoff(&self) -> T {
        self.cutoff
    }

    /// Residual magnitude treated as round-off: `sqrt(ε) · max|y|`.
    ///
    /// A best model that fits half the rows exactly still leaves QR round-off
    /// in their residuals; anything at or below this level counts as zero.
    pub fn round_off_tolerance(targets: &[T]) -> T {
        let max_abs = targets
            .iter()
            .filter(|y| y.is_finite())
            .fold(T::zero(), |m, y| m.max(y.abs()));
        max_abs * T::epsilon().sqrt()
    }

    /// `sqrt(squared_residual) / scale`, with the zero-scale case made explicit.
    ///
    /// A scale at or below `tolerance` is treated as zero: the ratio is then 0
    /// for residuals within `tolerance` and `+∞` otherwise.
    #[inline]
    pub fn standardized(squared_residual: T, scale: T, tolerance: T) -> T {
        let residual = squared_residual.sqrt();
        if scale > tolerance {
            residual / scale
        } else if residual <= tolerance {
            T::zero()
        } else {
            T::infinity()
        }
    }

    /// Weight of one row given its squared residual.
    #[inline]
    pub fn weight(&self, squared_residual: T, scale: T, tolerance: T) -> T {
        if Self::standardized(squared_residual, scale, tolerance) < self.cutoff {
            T::one()
        } else {
            T::zero()
        }
    }

    /// Weight precomputed squared residuals against `scale`.
    pub fn weigh(&self, squared_residuals: &[T], scale: T, tolerance: T) -> Weighting<T> {
        let mut weights = Vec::with_capacity(squared_residuals.len());
        let mut inliers = Vec::new();

        for (i, &r) in squared_residuals.iter().enumerate() {
            let w = self.weight(r, scale, tolerance);
            if w > T::zero() {
                inliers.push(i);
            }
            weights.push(w);
        }

        Weighting {
            scale,
            tolerance,
            weights,
            inliers,
        }
    }

    /// Recompute the best model's residuals on `data` and weight every row.
    ///
    /// # Errors
    ///
    /// `DegenerateScale` when the dataset has no residual degrees of freedom.
    pub fn compute_weights(
        &self,
        best_model: &LinearModel<T>,
        best_median: T,
        data: &Dataset<T>,
    ) -> Result<Weighting<T>, LmsError> {
        let scale = lms_scale(best_median, data.n_rows(), data.n_attributes())?;
        let tolerance = Self::round_off_tolerance(data.targets());
        let residuals = ResidualScorer::squared_residuals(best_model, data);

        Ok(self.weigh(&residuals, scale, tolerance))
    }
}
