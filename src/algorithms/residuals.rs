//! Squared residuals and their median.
//!
//! ## Purpose
//!
//! This module scores a candidate model on the full dataset: it computes
//! `r_i = (predict(x_i) − y_i)²` for every row and reads the median with
//! Quickselect. The median is the LMS objective.
//!
//! ## Design notes
//!
//! * **Scratch**: The caller owns the residual buffer and reuses it across
//!   trials; selection reorders it, so it is only valid until the next score.
//! * **Diagnostics**: The plain sum of squared residuals is kept alongside the
//!   median for trace output only.
//!
//! ## Invariants
//!
//! * The median is taken at rank `floor(n / 2)`.
//! * Residuals are non-negative.

use crate::algorithms::regression::LinearModel;
use crate::math::linalg::FloatLinalg;
use crate::math::select::median_inplace;
use crate::primitives::dataset::Dataset;

/// Score of one model on the full dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialScore<T> {
    /// Median squared residual.
    pub median: T,

    /// Sum of squared residuals.
    pub sum_of_squares: T,
}

/// Computes squared residuals and the median objective.
pub struct ResidualScorer;

impl ResidualScorer {
    /// Fill `out` with the squared residual of every row and return their sum.
    pub fn squared_residuals_into<T: FloatLinalg>(
        model: &LinearModel<T>,
        data: &Dataset<T>,
        out: &mut Vec<T>,
    ) -> T {
        out.clear();
        let mut sum = T::zero();
        for i in 0..data.n_rows() {
            let r = model.predict(data.row(i)) - data.target(i);
            let sq = r * r;
            sum = sum + sq;
            out.push(sq);
        }
        sum
    }

    /// Squared residuals of every row as a fresh vector.
    pub fn squared_residuals<T: FloatLinalg>(model: &LinearModel<T>, data: &Dataset<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(data.n_rows());
        Self::squared_residuals_into(model, data, &mut out);
        out
    }

    /// Score `model` on `data`, using `scratch` as the residual buffer.
    ///
    /// An empty dataset scores an infinite median.
    pub fn score<T: FloatLinalg>(
        model: &LinearModel<T>,
        data: &Dataset<T>,
        scratch: &mut Vec<T>,
    ) -> TrialScore<T> {
        let sum_of_squares = Self::squared_residuals_into(model, data, scratch);
        let median = median_inplace(scratch).unwrap_or_else(T::infinity);

        TrialScore {
            median,
            sum_of_squares,
        }
    }
}
