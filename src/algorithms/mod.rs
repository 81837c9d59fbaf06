//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the pieces of the Least Median of Squares search:
//! - Linear models and least-squares solvers
//! - Trial planning and random subsample draws
//! - Residual scoring by median squared residual
//! - Binary outlier weighting from the robust scale
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear models and solvers.
pub mod regression;

/// Residual scoring.
pub mod residuals;

/// Trial planning and subset sampling.
pub mod sampling;

/// Outlier weighting.
pub mod weighting;
