//! # lms-rs: Least Median of Squares robust regression for Rust
//!
//! A robust linear-regression estimator that stays accurate when a large
//! fraction of the training rows are gross outliers.
//!
//! ## What is LMS?
//!
//! Ordinary least squares minimizes the *sum* of squared residuals, so a
//! single wild point can drag the fit anywhere. Least Median of Squares
//! (Rousseeuw, 1984) minimizes the *median* squared residual instead, which
//! tolerates up to roughly half of the data being contaminated.
//!
//! **How the estimator works:**
//!
//! 1. Decide how many random subsamples to try (exhaustive on tiny datasets)
//! 2. For each trial, fit least squares on `k` random rows
//! 3. Score the trial by the median squared residual over *all* rows
//! 4. Keep the trial with the lowest median
//! 5. Derive a robust scale from that median and flag rows beyond 2.5 scales as outliers
//! 6. Refit least squares on the inliers only
//!
//! ## Quick Start
//!
//! ```rust
//! use lms_rs::prelude::*;
//!
//! // y = 2x + 1 with a little noise and two gross outliers
//! let x: Vec<[f64; 1]> = (0..20).map(|i| [i as f64]).collect();
//! let mut y: Vec<f64> = (0..20)
//!     .map(|i| 2.0 * i as f64 + 1.0 + 0.1 * (1.7 * i as f64).sin())
//!     .collect();
//! y[3] = 1000.0;
//! y[15] = 1000.0;
//!
//! let data = Dataset::from_rows(&x, &y)?;
//!
//! let mut lms = Lms::new()
//!     .subsample_size(2)  // Two rows determine a line
//!     .seed(42)           // Reproducible sampling
//!     .build()?;
//!
//! let model = lms.fit(&data)?;
//!
//! assert!((model.coefficients()[0] - 2.0).abs() < 0.05);
//! assert!((model.intercept() - 1.0).abs() < 0.3);
//! assert_eq!(model.weights[3], 0.0);
//! assert_eq!(model.weights[15], 0.0);
//!
//! println!("{}", model);
//! # Result::<(), LmsError>::Ok(())
//! ```
//!
//! ```text
//! Least Median of Squares Regression
//!
//! Summary:
//!   Data points: 20
//!   Subsample size: 2
//!   Trials: 190
//!   Best median squared residual: 0.002417
//!   Scale estimate: 0.097812
//!   Inliers: 18
//!   Outliers: 2
//!   Final fit: least squares on inliers
//!
//! Coefficients:
//!   Term              Estimate
//!   --------------------------
//!   (Intercept)       0.998153
//!   x1                2.000412
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns a `Result<&LmsModel<T>, LmsError>`. Errors abort the build
//! and leave no partial model behind:
//!
//! - **Configuration**: empty dataset, infinite values, too few rows, bad parameters
//! - **`SingularSubset`**: a trial subsample cannot determine the model
//! - **`DegenerateScale`**: as many attributes as rows, so no scale can be estimated
//! - **`NotBuilt`**: `predict` on an estimator that has not completed a build
//!
//! An empty inlier set is *not* an error: the best trial model becomes the
//! final model and `LmsModel::is_fallback()` reports it.
//!
//! ## Parameters
//!
//! | Parameter              | Default                | Range/Options              | Description                                  |
//! |------------------------|------------------------|----------------------------|----------------------------------------------|
//! | **subsample_size**     | 4                      | [1, ∞)                     | Rows per trial subsample                     |
//! | **seed**               | 0                      | u64                        | Fixed seed for reproducible sampling         |
//! | **random_sampling**    | off                    | flag                       | Seed from OS entropy instead                 |
//! | **debug_trace**        | off                    | flag                       | `log::debug!` record for every trial         |
//! | **solver**             | `OrdinaryLeastSquares` | `Ridge(λ)`                 | Linear solver for trials and refit           |
//! | **singular_subsets**   | `Skip`                 | `Skip`, `Abort`            | Handling of rank-deficient trial subsets     |
//! | **cutoff**             | 2.5                    | [0, ∞)                     | Standardized residual cutoff for inliers     |
//!
//! ### Trial count
//!
//! | Subsample size `k` | Small-dataset threshold | Trials below threshold | Trials otherwise |
//! |--------------------|-------------------------|------------------------|------------------|
//! | 1                  | 500                     | `C(n, 1)`              | 500              |
//! | 2                  | 50                      | `C(n, 2)`              | 1000             |
//! | 3                  | 22                      | `C(n, 3)`              | 1500             |
//! | 4                  | 17                      | `C(n, 4)`              | 2000             |
//! | 5                  | 15                      | `C(n, 5)`              | 2500             |
//! | 6                  | 14                      | `C(n, 6)`              | 3000             |
//! | ≥ 7                | none                    | n/a                    | 3000             |
//!
//! ### Singular subsets
//!
//! ```rust
//! use lms_rs::prelude::*;
//!
//! // Identical x values make every two-row subset singular.
//! let x = [[3.0]; 6];
//! let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let data = Dataset::from_rows(&x, &y)?;
//!
//! // Default: singular trials are skipped; the build fails only if none remain.
//! let mut lms = Lms::new().subsample_size(2).build()?;
//! assert_eq!(lms.fit(&data).unwrap_err(), LmsError::NoValidTrial { trials: 15 });
//!
//! // Abort: the first singular trial fails the build.
//! let mut strict = Lms::new()
//!     .subsample_size(2)
//!     .singular_subsets(Abort)
//!     .build()?;
//! assert!(matches!(strict.fit(&data), Err(LmsError::SingularSubset { .. })));
//! # Result::<(), LmsError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: phase
//! summaries at `debug`, best-model replacements at `trace`, the empty inlier
//! fallback at `warn`. Install any logger (e.g. `env_logger`) to see them.
//!
//! ## References
//!
//! - Rousseeuw, P. J. (1984). "Least Median of Squares Regression"
//! - Rousseeuw, P. J. & Leroy, A. M. (1987). "Robust Regression and Outlier Detection"

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and errors.
//
// Contains the in-memory `Dataset` and the `LmsError` taxonomy.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains binomial coefficients, Quickselect, the nalgebra least-squares
// backend and the LMS scale estimate.
mod math;

// Layer 3: Algorithms - LMS building blocks.
//
// Contains linear solvers, trial planning and sampling, residual scoring
// and outlier weighting.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains validation, preprocessing, the trial search, refit and result
// assembly.
mod engine;

// High-level fluent API.
//
// Provides the `Lms` builder and the `LeastMedianSquares` estimator.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard LMS prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use lms_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        BuildState, Dataset, FinalFit, LeastMedianSquares, LinearModel, LinearSolver,
        LmsBuilder as Lms, LmsError, LmsModel, SingularSubsetPolicy,
        SingularSubsetPolicy::{Abort, Skip},
        SolverMethod,
        SolverMethod::{OrdinaryLeastSquares, Ridge},
    };
}

pub use api::{
    BuildState, Dataset, FinalFit, LeastMedianSquares, LinearModel, LinearSolver, LmsBuilder,
    LmsConfig, LmsError, LmsModel, SingularSubsetPolicy, SolverMethod,
};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal LMS algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
