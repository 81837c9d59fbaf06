//! Fitted LMS model and its textual summary.
//!
//! ## Purpose
//!
//! This module defines `LmsModel`, the immutable result of a successful
//! build: the final linear model, the best search-phase model it came from,
//! the inlier weights and the search bookkeeping.
//!
//! ## Design notes
//!
//! * **Ownership**: The final model is owned here; nothing else aliases it.
//! * **Fallback**: `final_fit` records whether the model is an inlier refit or
//!   the best trial model reused because no inliers remained.
//!
//! ## Non-goals
//!
//! * This module does not fit anything.

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithms::regression::LinearModel;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::LmsError;

/// How the final model was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FinalFit {
    /// Least squares on the inlier rows.
    Refit,

    /// The best search-phase model, because the inlier set was empty.
    BestTrial,
}

/// Result of a Least Median of Squares build.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LmsModel<T> {
    /// Final model used for prediction.
    pub model: LinearModel<T>,

    /// Best model found by the search.
    pub best_trial_model: LinearModel<T>,

    /// Trial number of the best model.
    pub best_trial: usize,

    /// Median squared residual of the best model.
    pub best_median: T,

    /// Robust scale estimate.
    pub scale: T,

    /// Inlier weight (0 or 1) for each row of the cleaned dataset.
    pub weights: Vec<T>,

    /// Number of rows with weight 1.
    pub n_inliers: usize,

    /// How `model` was produced.
    pub final_fit: FinalFit,

    /// Rows per subsample.
    pub subsample_size: usize,

    /// Trials planned by the sample-size heuristic.
    pub trials_planned: usize,

    /// Trials skipped because their subsample was singular.
    pub trials_skipped: usize,

    /// Original indices of rows dropped for a missing target.
    pub dropped_rows: Vec<usize>,

    /// Feature names, one per coefficient.
    pub feature_names: Vec<String>,
}

impl<T: FloatLinalg> LmsModel<T> {
    /// Predict the target for one feature row.
    pub fn predict(&self, row: &[T]) -> Result<T, LmsError> {
        Validator::validate_row_dimension(self.model.n_features(), row.len())?;
        Ok(self.model.predict(row))
    }

    /// Predict a batch of feature rows.
    pub fn predict_many<R: AsRef<[T]>>(&self, rows: &[R]) -> Result<Vec<T>, LmsError> {
        rows.iter().map(|r| self.predict(r.as_ref())).collect()
    }

    /// Final intercept.
    #[inline]
    pub fn intercept(&self) -> T {
        self.model.intercept
    }

    /// Final feature coefficients.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.model.coefficients
    }

    /// Number of rows used in the search.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.weights.len()
    }

    /// Number of rows with weight 0.
    #[inline]
    pub fn n_outliers(&self) -> usize {
        self.weights.len() - self.n_inliers
    }

    /// Trials that produced a scored model.
    #[inline]
    pub fn trials_evaluated(&self) -> usize {
        self.trials_planned - self.trials_skipped
    }

    /// Whether the best trial model was reused because no inliers remained.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.final_fit == FinalFit::BestTrial
    }

    /// Indices (into the cleaned dataset) of the outlier rows.
    pub fn outlier_rows(&self) -> Vec<usize> {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, &w)| w == T::zero())
            .map(|(i, _)| i)
            .collect()
    }
}

impl<T: FloatLinalg + Display> LmsModel<T> {
    /// Human-readable summary: coefficients and inlier/outlier counts.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: FloatLinalg + Display> Display for LmsModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Least Median of Squares Regression")?;
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_rows())?;
        if !self.dropped_rows.is_empty() {
            writeln!(f, "  Dropped (missing target): {}", self.dropped_rows.len())?;
        }
        writeln!(f, "  Subsample size: {}", self.subsample_size)?;
        write!(f, "  Trials: {}", self.trials_planned)?;
        if self.trials_skipped > 0 {
            write!(f, " ({} singular, skipped)", self.trials_skipped)?;
        }
        writeln!(f)?;
        writeln!(f, "  Best median squared residual: {:.6}", self.best_median)?;
        writeln!(f, "  Scale estimate: {:.6}", self.scale)?;
        writeln!(f, "  Inliers: {}", self.n_inliers)?;
        writeln!(f, "  Outliers: {}", self.n_outliers())?;
        match self.final_fit {
            FinalFit::Refit => writeln!(f, "  Final fit: least squares on inliers")?,
            FinalFit::BestTrial => writeln!(f, "  Final fit: best trial model (no inliers)")?,
        }
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        let width = self
            .feature_names
            .iter()
            .map(String::len)
            .chain(core::iter::once("(Intercept)".len()))
            .max()
            .unwrap_or(0);
        writeln!(f, "  {:<width$} {:>14}", "Term", "Estimate", width = width)?;
        writeln!(f, "  {:-<total$}", "", total = width + 15)?;
        writeln!(
            f,
            "  {:<width$} {:>14.6}",
            "(Intercept)",
            self.model.intercept,
            width = width
        )?;
        for (name, coef) in self.feature_names.iter().zip(&self.model.coefficients) {
            writeln!(f, "  {:<width$} {:>14.6}", name, coef, width = width)?;
        }

        Ok(())
    }
}
