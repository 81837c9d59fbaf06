//! High-level API for Least Median of Squares regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the estimator and the estimator itself,
//! which owns the build state machine and the fitted model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Stateful**: `predict` is only valid once a build reached `Built`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LmsBuilder`] via `Lms::new()`.
//! 2. Chain configuration methods (`.subsample_size()`, `.seed()`, etc.).
//! 3. Call `.build()` to get a [`LeastMedianSquares`] estimator.
//! 4. Call `.fit(&dataset)` to run the search and refit.

use core::fmt::{Debug, Display};

use log::{debug, trace, warn};

use crate::engine::executor::LmsExecutor;
use crate::engine::preprocess::Preprocessor;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::regression::{LinearModel, LinearSolver, SolverMethod};
pub use crate::engine::executor::{BuildState, LmsConfig, SingularSubsetPolicy};
pub use crate::engine::output::{FinalFit, LmsModel};
pub use crate::primitives::dataset::Dataset;
pub use crate::primitives::errors::LmsError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a Least Median of Squares estimator.
#[derive(Debug, Clone)]
pub struct LmsBuilder<T: FloatLinalg> {
    /// Rows per trial subsample (default: 4).
    pub subsample_size: Option<usize>,

    /// Seed the sampler from OS entropy (default: false).
    pub random_sampling: Option<bool>,

    /// Fixed sampler seed (default: 0).
    pub random_seed: Option<u64>,

    /// Per-trial debug records (default: false).
    pub debug_trace: Option<bool>,

    /// Linear solver (default: ordinary least squares).
    pub solver: Option<SolverMethod<T>>,

    /// Singular trial handling (default: Skip).
    pub singular_subsets: Option<SingularSubsetPolicy>,

    /// Standardized residual cutoff (default: 2.5).
    pub cutoff: Option<T>,

    /// Parallel trial scoring hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + Debug> Default for LmsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + Debug> LmsBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            subsample_size: None,
            random_sampling: None,
            random_seed: None,
            debug_trace: None,
            solver: None,
            singular_subsets: None,
            cutoff: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of rows drawn per trial.
    pub fn subsample_size(mut self, k: usize) -> Self {
        if self.subsample_size.is_some() {
            self.duplicate_param = Some("subsample_size");
        }
        self.subsample_size = Some(k);
        self
    }

    /// Seed the sampler from OS entropy instead of the fixed seed.
    pub fn random_sampling(mut self) -> Self {
        if self.random_sampling.is_some() {
            self.duplicate_param = Some("random_sampling");
        }
        self.random_sampling = Some(true);
        self
    }

    /// Set the fixed sampler seed.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.random_seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.random_seed = Some(seed);
        self
    }

    /// Emit a debug log record for every trial.
    pub fn debug_trace(mut self) -> Self {
        if self.debug_trace.is_some() {
            self.duplicate_param = Some("debug_trace");
        }
        self.debug_trace = Some(true);
        self
    }

    /// Set the linear solver used for trials and the final refit.
    pub fn solver(mut self, solver: SolverMethod<T>) -> Self {
        if self.solver.is_some() {
            self.duplicate_param = Some("solver");
        }
        self.solver = Some(solver);
        self
    }

    /// Set how singular trial subsets are handled.
    pub fn singular_subsets(mut self, policy: SingularSubsetPolicy) -> Self {
        if self.singular_subsets.is_some() {
            self.duplicate_param = Some("singular_subsets");
        }
        self.singular_subsets = Some(policy);
        self
    }

    /// Set the standardized residual cutoff separating inliers from outliers.
    pub fn cutoff(mut self, cutoff: T) -> Self {
        if self.cutoff.is_some() {
            self.duplicate_param = Some("cutoff");
        }
        self.cutoff = Some(cutoff);
        self
    }

    /// Score trials in parallel (only with the `parallel` feature).
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and create the estimator.
    pub fn build(self) -> Result<LeastMedianSquares<T>, LmsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = LmsConfig::default();
        if let Some(k) = self.subsample_size {
            config.subsample_size = k;
        }
        if let Some(rs) = self.random_sampling {
            config.random_sampling = rs;
        }
        if let Some(seed) = self.random_seed {
            config.random_seed = seed;
        }
        if let Some(dt) = self.debug_trace {
            config.debug_trace = dt;
        }
        if let Some(solver) = self.solver {
            config.solver = solver;
        }
        if let Some(policy) = self.singular_subsets {
            config.singular_subsets = policy;
        }
        if let Some(cutoff) = self.cutoff {
            config.cutoff = cutoff;
        }
        if let Some(p) = self.parallel {
            config.parallel = p;
        }

        Validator::validate_subsample_size(config.subsample_size)?;
        Validator::validate_cutoff(config.cutoff)?;
        Validator::validate_solver(&config.solver)?;

        if config.parallel && cfg!(not(feature = "parallel")) {
            warn!("parallel scoring requested without the `parallel` feature; running sequentially");
        }

        Ok(LeastMedianSquares::from_config(config))
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// Least Median of Squares estimator.
///
/// Holds the configuration, the build state and, once built, the fitted model.
#[derive(Debug, Clone)]
pub struct LeastMedianSquares<T: FloatLinalg> {
    config: LmsConfig<T>,
    state: BuildState,
    model: Option<LmsModel<T>>,
}

impl<T: FloatLinalg + Debug> LeastMedianSquares<T> {
    /// Create an estimator from an already validated configuration.
    pub fn from_config(config: LmsConfig<T>) -> Self {
        Self {
            config,
            state: BuildState::NotBuilt,
            model: None,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &LmsConfig<T> {
        &self.config
    }

    /// Current build state.
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Fit the model with the configured solver.
    pub fn fit(&mut self, data: &Dataset<T>) -> Result<&LmsModel<T>, LmsError> {
        let solver = self.config.solver;
        self.fit_with(data, &solver)
    }

    /// Fit the model with a caller-supplied solver.
    ///
    /// On error the estimator returns to `NotBuilt` and keeps no partial model.
    pub fn fit_with<S: LinearSolver<T>>(
        &mut self,
        data: &Dataset<T>,
        solver: &S,
    ) -> Result<&LmsModel<T>, LmsError> {
        self.state = BuildState::NotBuilt;
        self.model = None;

        Validator::validate_dataset(data)?;
        let cleaned = Preprocessor::run(data);
        if !cleaned.dropped_rows.is_empty() || cleaned.imputed_values > 0 {
            debug!(
                "LMS preprocessing: dropped {} rows with missing target, imputed {} values",
                cleaned.dropped_rows.len(),
                cleaned.imputed_values
            );
        }
        Validator::validate_row_count(cleaned.data.n_rows(), self.config.subsample_size)?;

        let state = &mut self.state;
        let executor = LmsExecutor::new(&cleaned.data, solver, &self.config);
        let result = executor.run(|next| {
            trace!("LMS state: {:?} -> {:?}", state, next);
            *state = next;
        });

        match result {
            Ok(mut model) => {
                model.dropped_rows = cleaned.dropped_rows;
                Ok(&*self.model.insert(model))
            }
            Err(err) => {
                self.state = BuildState::NotBuilt;
                Err(err)
            }
        }
    }

    /// Fitted model, if a build completed.
    pub fn model(&self) -> Result<&LmsModel<T>, LmsError> {
        self.model.as_ref().ok_or(LmsError::NotBuilt)
    }

    /// Consume the estimator and return the fitted model.
    pub fn into_model(self) -> Result<LmsModel<T>, LmsError> {
        self.model.ok_or(LmsError::NotBuilt)
    }

    /// Predict the target for one feature row.
    pub fn predict(&self, row: &[T]) -> Result<T, LmsError> {
        self.model()?.predict(row)
    }
}

impl<T: FloatLinalg + Debug + Display> LeastMedianSquares<T> {
    /// Summary of the fitted model.
    pub fn describe(&self) -> Result<String, LmsError> {
        Ok(self.model()?.describe())
    }
}
