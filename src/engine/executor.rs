//! Execution engine for Least Median of Squares fitting.
//!
//! ## Purpose
//!
//! This module orchestrates one LMS build over a cleaned dataset: it plans
//! the number of trials, runs the randomized subsample search, derives the
//! inlier weights from the best trial and refits on the inliers.
//!
//! ## Design notes
//!
//! * **Phases**: `Planning → Searching → BestFound → Weighting → Refitting → Built`,
//!   reported to the caller through an observer callback.
//! * **Accumulator**: The running best is a `BestCandidate` local to the search,
//!   never shared state.
//! * **Randomness**: One `SubsetSampler` (and RNG) per build.
//! * **Parallelism**: With the `parallel` feature, subsets are drawn up front in
//!   trial order, scored with rayon, and folded in trial order, so results are
//!   identical to the sequential path.
//! * **Generics**: Generic over `FloatLinalg` types and any `LinearSolver`.
//!
//! ## Key concepts
//!
//! * **Trial**: Fit on `k` random rows, score by median squared residual on all rows.
//! * **Singular subsets**: Skip the trial (default) or abort the build.
//! * **Fallback**: An empty inlier set reuses the best trial model.
//!
//! ## Invariants
//!
//! * Ties in the median keep the earliest trial.
//! * The final model is produced exactly once per run.
//!
//! ## Non-goals
//!
//! * This module does not validate or clean input data (handled by `validator`
//!   and `preprocess`).
//! * This module does not format results.

use core::fmt::Debug;

use log::{debug, trace, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithms::regression::{LinearModel, LinearSolver, SolverMethod};
use crate::algorithms::residuals::ResidualScorer;
use crate::algorithms::sampling::{SampleSizePlanner, SeedSource, SubsetSampler};
use crate::algorithms::weighting::{OutlierWeighter, Weighting};
use crate::engine::output::{FinalFit, LmsModel};
use crate::engine::tracker::{BestCandidate, Candidate};
use crate::math::linalg::FloatLinalg;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LmsError;

// ============================================================================
// Configuration
// ============================================================================

/// What to do when a trial subsample cannot be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SingularSubsetPolicy {
    /// Abort the whole build with the fit error.
    Abort,

    /// Drop the trial and continue with the next draw.
    #[default]
    Skip,
}

/// Build state of an estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildState {
    /// No completed build.
    #[default]
    NotBuilt,

    /// Choosing the number of trials.
    Planning,

    /// Running the subsample search.
    Searching {
        /// Planned trials.
        trials: usize,
    },

    /// Search finished with a best candidate.
    BestFound,

    /// Computing inlier weights.
    Weighting,

    /// Fitting the final model.
    Refitting,

    /// Final model available.
    Built(FinalFit),
}

/// Configuration of one LMS build.
#[derive(Debug, Clone, PartialEq)]
pub struct LmsConfig<T> {
    /// Rows per trial subsample.
    pub subsample_size: usize,

    /// Seed from OS entropy instead of `random_seed`.
    pub random_sampling: bool,

    /// Fixed seed for reproducible sampling.
    pub random_seed: u64,

    /// Emit a debug record for every trial.
    pub debug_trace: bool,

    /// Solver for trial fits and the final refit.
    pub solver: SolverMethod<T>,

    /// Handling of singular trial subsets.
    pub singular_subsets: SingularSubsetPolicy,

    /// Standardized residual cutoff for inliers.
    pub cutoff: T,

    /// Score trials in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl<T: FloatLinalg> Default for LmsConfig<T> {
    fn default() -> Self {
        Self {
            subsample_size: 4,
            random_sampling: false,
            random_seed: 0,
            debug_trace: false,
            solver: SolverMethod::OrdinaryLeastSquares,
            singular_subsets: SingularSubsetPolicy::Skip,
            cutoff: T::from(OutlierWeighter::<T>::DEFAULT_CUTOFF).unwrap(),
            parallel: false,
        }
    }
}

impl<T> LmsConfig<T> {
    /// Seed source implied by `random_sampling` and `random_seed`.
    pub fn seed_source(&self) -> SeedSource {
        if self.random_sampling {
            SeedSource::Entropy
        } else {
            SeedSource::Fixed(self.random_seed)
        }
    }
}

// ============================================================================
// Search Outcome
// ============================================================================

/// Result of the subsample search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    /// Lowest-median candidate.
    pub best: Candidate<T>,

    /// Trials run.
    pub trials: usize,

    /// Trials skipped as singular.
    pub skipped: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the LMS phases over one dataset.
#[derive(Debug)]
pub struct LmsExecutor<'a, T, S> {
    data: &'a Dataset<T>,
    solver: &'a S,
    config: &'a LmsConfig<T>,
}

impl<'a, T, S> LmsExecutor<'a, T, S>
where
    T: FloatLinalg + Debug,
    S: LinearSolver<T>,
{
    /// Create an executor over a cleaned dataset.
    pub fn new(data: &'a Dataset<T>, solver: &'a S, config: &'a LmsConfig<T>) -> Self {
        Self {
            data,
            solver,
            config,
        }
    }

    /// Run every phase, reporting each state transition to `observe`.
    pub fn run<F>(&self, mut observe: F) -> Result<LmsModel<T>, LmsError>
    where
        F: FnMut(BuildState),
    {
        observe(BuildState::Planning);
        let trials = self.plan()?;

        observe(BuildState::Searching { trials });
        let outcome = self.search(trials)?;
        observe(BuildState::BestFound);

        observe(BuildState::Weighting);
        let weighting = self.weight(&outcome.best)?;

        observe(BuildState::Refitting);
        let (model, final_fit) = self.refit(&outcome.best, &weighting)?;
        observe(BuildState::Built(final_fit));

        let best = outcome.best;
        Ok(LmsModel {
            model,
            best_trial_model: best.model,
            best_trial: best.trial,
            best_median: best.score.median,
            scale: weighting.scale,
            n_inliers: weighting.inliers.len(),
            weights: weighting.weights,
            final_fit,
            subsample_size: self.config.subsample_size,
            trials_planned: outcome.trials,
            trials_skipped: outcome.skipped,
            dropped_rows: Vec::new(),
            feature_names: (0..self.data.n_features())
                .map(|j| self.data.feature_name(j))
                .collect(),
        })
    }

    // ========================================================================
    // Planning
    // ========================================================================

    /// Number of search trials for this dataset.
    pub fn plan(&self) -> Result<usize, LmsError> {
        let trials = SampleSizePlanner::plan_trials(self.config.subsample_size, self.data.n_rows())?;
        debug!(
            "LMS plan: {} trials of {} rows over {} rows",
            trials,
            self.config.subsample_size,
            self.data.n_rows()
        );
        Ok(trials)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Run `trials` subsample fits and keep the lowest-median model.
    pub fn search(&self, trials: usize) -> Result<SearchOutcome<T>, LmsError> {
        let mut sampler = SubsetSampler::new(
            self.config.seed_source(),
            self.data.n_rows(),
            self.config.subsample_size,
        )?;

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return self.search_parallel(trials, &mut sampler);
            }
        }

        self.search_sequential(trials, &mut sampler)
    }

    fn search_sequential(
        &self,
        trials: usize,
        sampler: &mut SubsetSampler,
    ) -> Result<SearchOutcome<T>, LmsError> {
        let mut tracker = BestCandidate::new();
        let mut scratch = Vec::with_capacity(self.data.n_rows());
        let mut skipped = 0;

        for trial in 0..trials {
            let indices = sampler.draw();
            match self.run_trial(trial, indices, &mut scratch)? {
                Some(candidate) => self.offer(&mut tracker, candidate),
                None => skipped += 1,
            }
        }

        self.finish(tracker, trials, skipped)
    }

    #[cfg(feature = "parallel")]
    fn search_parallel(
        &self,
        trials: usize,
        sampler: &mut SubsetSampler,
    ) -> Result<SearchOutcome<T>, LmsError> {
        let subsets: Vec<Vec<usize>> = (0..trials).map(|_| sampler.draw()).collect();
        let n = self.data.n_rows();

        let results: Vec<Result<Option<Candidate<T>>, LmsError>> = subsets
            .into_par_iter()
            .enumerate()
            .map_init(
                || Vec::with_capacity(n),
                |scratch, (trial, indices)| self.run_trial(trial, indices, scratch),
            )
            .collect();

        let mut tracker = BestCandidate::new();
        let mut skipped = 0;
        for result in results {
            match result? {
                Some(candidate) => self.offer(&mut tracker, candidate),
                None => skipped += 1,
            }
        }

        self.finish(tracker, trials, skipped)
    }

    /// Fit and score one subsample. `Ok(None)` means the trial was skipped.
    fn run_trial(
        &self,
        trial: usize,
        indices: Vec<usize>,
        scratch: &mut Vec<T>,
    ) -> Result<Option<Candidate<T>>, LmsError> {
        let subset = self.data.select_by_indices(&indices);

        let model = match self.solver.fit(&subset) {
            Ok(model) => model,
            Err(err @ LmsError::SingularSubset { .. }) => match self.config.singular_subsets {
                SingularSubsetPolicy::Abort => return Err(err),
                SingularSubsetPolicy::Skip => {
                    if self.config.debug_trace {
                        debug!("LMS trial {}: rows {:?} singular, skipped", trial, indices);
                    }
                    return Ok(None);
                }
            },
            Err(err) => return Err(err),
        };

        let score = ResidualScorer::score(&model, self.data, scratch);
        if self.config.debug_trace {
            debug!(
                "LMS trial {}: rows {:?} median {:?} sum {:?}",
                trial, indices, score.median, score.sum_of_squares
            );
        }

        Ok(Some(Candidate {
            trial,
            indices,
            model,
            score,
        }))
    }

    fn offer(&self, tracker: &mut BestCandidate<T>, candidate: Candidate<T>) {
        let (trial, median) = (candidate.trial, candidate.score.median);
        if tracker.offer(candidate) {
            trace!("LMS trial {} is the new best (median {:?})", trial, median);
        }
    }

    fn finish(
        &self,
        tracker: BestCandidate<T>,
        trials: usize,
        skipped: usize,
    ) -> Result<SearchOutcome<T>, LmsError> {
        let scored = tracker.offered();
        let best = tracker.into_best().ok_or(LmsError::NoValidTrial { trials })?;
        debug!(
            "LMS search: best median {:?} from trial {} ({} scored, {} skipped)",
            best.score.median, best.trial, scored, skipped
        );

        Ok(SearchOutcome {
            best,
            trials,
            skipped,
        })
    }

    // ========================================================================
    // Weighting and Refit
    // ========================================================================

    /// Binary inlier weights from the best candidate.
    pub fn weight(&self, best: &Candidate<T>) -> Result<Weighting<T>, LmsError> {
        let weighter = OutlierWeighter::new(self.config.cutoff);
        let weighting = weighter.compute_weights(&best.model, best.score.median, self.data)?;
        debug!(
            "LMS weighting: scale {:?}, cutoff {:?}, {} inliers, {} outliers",
            weighting.scale,
            weighter.cutoff(),
            weighting.inliers.len(),
            weighting.n_outliers()
        );
        Ok(weighting)
    }

    /// Least squares on the inliers, or the best trial model if there are none.
    pub fn refit(
        &self,
        best: &Candidate<T>,
        weighting: &Weighting<T>,
    ) -> Result<(LinearModel<T>, FinalFit), LmsError> {
        if weighting.inliers.is_empty() {
            warn!("LMS refit: no inliers remain, using the best trial model");
            return Ok((best.model.clone(), FinalFit::BestTrial));
        }

        let inliers = self.data.select_by_indices(&weighting.inliers);
        let model = self.solver.fit(&inliers)?;
        Ok((model, FinalFit::Refit))
    }
}
