//! Linear algebra backend abstraction for least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense
//! least-squares solve used by every trial fit and by the final refit,
//! standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Solves the (already row-weighted) design system directly with a
//!   Householder QR decomposition instead of forming normal equations, so
//!   tiny trial subsets keep full precision.
//! * Rank deficiency is reported as `None`; there is no SVD fallback because a
//!   singular subset must surface as a fit error.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Send + Sync + 'static {
    /// Solve `min ||A·beta − b||₂` for a row-major `rows × cols` matrix `A`.
    ///
    /// Returns `None` when `A` does not have full column rank.
    fn solve_least_squares(design: &[Self], rhs: &[Self], rows: usize, cols: usize)
        -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_least_squares(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f64(design, rhs, rows, cols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_least_squares(design: &[Self], rhs: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f32(design, rhs, rows, cols)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use nalgebra::{DMatrix, DVector};

    /// Relative tolerance multiplier for the rank test on `diag(R)`.
    const RANK_TOLERANCE_SCALE: f64 = 10.0;

    /// Least-squares solve using f64 precision.
    pub fn solve_least_squares_f64(
        design: &[f64],
        rhs: &[f64],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f64>> {
        if cols == 0 || rows < cols {
            return None;
        }

        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);
        let (q, r) = matrix.qr().unpack();

        let diag_max = r.diagonal().iter().fold(0.0_f64, |m, d| m.max(d.abs()));
        let tol = diag_max * rows.max(cols) as f64 * f64::EPSILON * RANK_TOLERANCE_SCALE;
        if diag_max == 0.0 || r.diagonal().iter().any(|d| d.abs() <= tol) {
            return None;
        }

        let qtb = q.transpose() * b;
        r.solve_upper_triangular(&qtb)
            .map(|beta| beta.as_slice().to_vec())
    }

    /// Least-squares solve using f32 precision.
    pub fn solve_least_squares_f32(
        design: &[f32],
        rhs: &[f32],
        rows: usize,
        cols: usize,
    ) -> Option<Vec<f32>> {
        if cols == 0 || rows < cols {
            return None;
        }

        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);
        let (q, r) = matrix.qr().unpack();

        let diag_max = r.diagonal().iter().fold(0.0_f32, |m, d| m.max(d.abs()));
        let tol = diag_max * rows.max(cols) as f32 * f32::EPSILON * RANK_TOLERANCE_SCALE as f32;
        if diag_max == 0.0 || r.diagonal().iter().any(|d| d.abs() <= tol) {
            return None;
        }

        let qtb = q.transpose() * b;
        r.solve_upper_triangular(&qtb)
            .map(|beta| beta.as_slice().to_vec())
    }
}
