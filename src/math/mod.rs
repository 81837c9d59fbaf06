//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the LMS search:
//! - Binomial coefficients for exhaustive trial counts
//! - Order-statistic selection (median of squared residuals)
//! - Least-squares solves through nalgebra
//! - The LMS robust scale estimate
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binomial coefficients.
pub mod combinatorics;

/// Least-squares backend.
pub mod linalg;

/// LMS scale estimate.
pub mod scale;

/// Quickselect.
pub mod select;
