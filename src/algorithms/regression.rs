//! Linear models and the solvers that fit them.
//!
//! ## Purpose
//!
//! This module provides the regression capability the LMS search is built
//! on: a `LinearModel` that predicts, and the `LinearSolver` trait that fits
//! one to a dataset. The search loop only sees the trait, so the solver can
//! be swapped without touching it.
//!
//! ## Design notes
//!
//! * **Algorithm**: Weighted least squares; every row is scaled by the square
//!   root of its weight before the QR solve.
//! * **Ridge**: Implemented by augmenting the design with `sqrt(λ)·I` rows for
//!   the feature columns; the intercept is not penalised.
//! * **Failure**: Rank-deficient designs are reported as `SingularSubset` and
//!   never masked.
//! * **Generics**: Generic over `FloatLinalg` types.
//!
//! ## Invariants
//!
//! * A fitted model has exactly one coefficient per feature.
//!
//! ## Non-goals
//!
//! * This module does not select attributes or drop collinear columns.

use core::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::linalg::FloatLinalg;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LmsError;

// ============================================================================
// Linear Model
// ============================================================================

/// Intercept plus one coefficient per feature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearModel<T> {
    /// Constant term.
    pub intercept: T,

    /// Feature coefficients, in dataset column order.
    pub coefficients: Vec<T>,
}

impl<T: FloatLinalg> LinearModel<T> {
    /// Create a model from its parts.
    pub fn new(intercept: T, coefficients: Vec<T>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    /// Number of features the model expects.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict the target for one feature row.
    ///
    /// The row length is assumed to match `n_features()`.
    #[inline]
    pub fn predict(&self, row: &[T]) -> T {
        debug_assert_eq!(row.len(), self.coefficients.len());
        self.coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (&b, &x)| acc + b * x)
    }
}

// ============================================================================
// Solver Abstraction
// ============================================================================

/// Capability to fit a linear model to a dataset.
pub trait LinearSolver<T: FloatLinalg>: Debug + Send + Sync {
    /// Fit a model to every row of `data`, honouring row weights.
    fn fit(&self, data: &Dataset<T>) -> Result<LinearModel<T>, LmsError>;
}

/// Built-in linear solvers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverMethod<T> {
    /// Plain (weighted) ordinary least squares.
    #[default]
    OrdinaryLeastSquares,

    /// Ridge regression with penalty `λ` on the feature coefficients.
    Ridge(T),
}

impl<T: FloatLinalg + Debug> LinearSolver<T> for SolverMethod<T> {
    fn fit(&self, data: &Dataset<T>) -> Result<LinearModel<T>, LmsError> {
        match *self {
            Self::OrdinaryLeastSquares => fit_least_squares(data, T::zero()),
            Self::Ridge(lambda) => fit_least_squares(data, lambda),
        }
    }
}

// ============================================================================
// Least Squares
// ============================================================================

/// Build the weighted (and optionally ridge-augmented) design and solve it.
fn fit_least_squares<T: FloatLinalg>(data: &Dataset<T>, penalty: T) -> Result<LinearModel<T>, LmsError> {
    let rows = data.n_rows();
    let n_features = data.n_features();
    let cols = n_features + 1;

    let ridge_rows = if penalty > T::zero() { n_features } else { 0 };
    let total_rows = rows + ridge_rows;

    let mut design = Vec::with_capacity(total_rows * cols);
    let mut rhs = Vec::with_capacity(total_rows);

    for i in 0..rows {
        let sw = data.weight(i).sqrt();
        design.push(sw);
        design.extend(data.row(i).iter().map(|&v| sw * v));
        rhs.push(sw * data.target(i));
    }

    if ridge_rows > 0 {
        let s = penalty.sqrt();
        for j in 0..n_features {
            design.push(T::zero());
            design.extend((0..n_features).map(|k| if k == j { s } else { T::zero() }));
            rhs.push(T::zero());
        }
    }

    let beta = T::solve_least_squares(&design, &rhs, total_rows, cols).ok_or(
        LmsError::SingularSubset {
            rows,
            params: cols,
        },
    )?;

    Ok(LinearModel::new(beta[0], beta[1..].to_vec()))
}
