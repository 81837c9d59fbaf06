//! Trial planning and random subsample selection.
//!
//! ## Purpose
//!
//! This module decides how many random subsamples the LMS search fits
//! (`SampleSizePlanner`) and draws the row indices of each one
//! (`SubsetSampler`).
//!
//! ## Design notes
//!
//! * **Planning**: Small subsamples on small datasets get one trial per distinct
//!   subset, `C(n, k)`; otherwise `500·k` trials, capped at a flat 3000 from
//!   `k = 7` upwards.
//! * **Sampling**: Each subsample is `k` distinct rows drawn uniformly from the
//!   whole dataset, row 0 included. Distinct rows keep a subsample from
//!   duplicating a point and becoming singular by construction.
//! * **Randomness**: One `StdRng` per build, from a fixed seed or OS entropy.
//!
//! ## Invariants
//!
//! * Every drawn index is `< n_rows`; indices within a draw are distinct and sorted.
//! * With a fixed seed the sequence of draws is reproducible.
//!
//! ## Non-goals
//!
//! * This module does not enumerate subsets exhaustively; "exhaustive" trial
//!   counts still draw at random.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::math::combinatorics::combinations;
use crate::primitives::errors::LmsError;

// ============================================================================
// Sample Size Planner
// ============================================================================

/// Decides the number of search trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleSizePlanner;

impl SampleSizePlanner {
    /// Row-count thresholds below which trials become `C(n, k)`, indexed by `k - 1`.
    pub const SMALL_SAMPLE_THRESHOLDS: [usize; 6] = [500, 50, 22, 17, 15, 14];

    /// Trials per subsample row when the dataset is large enough.
    pub const TRIALS_PER_SUBSAMPLE_ROW: usize = 500;

    /// Trial count for subsamples of size 7 and above.
    pub const LARGE_SUBSAMPLE_TRIALS: usize = 3000;

    /// Number of trials for subsample size `k` on `n_rows` rows.
    ///
    /// # Errors
    ///
    /// * `InvalidSubsampleSize` if `k == 0`.
    /// * `CombinationDomain` if the small-sample branch has `k > n_rows`.
    pub fn plan_trials(k: usize, n_rows: usize) -> Result<usize, LmsError> {
        if k == 0 {
            return Err(LmsError::InvalidSubsampleSize(k));
        }

        if k > Self::SMALL_SAMPLE_THRESHOLDS.len() {
            return Ok(Self::LARGE_SUBSAMPLE_TRIALS);
        }

        if n_rows < Self::SMALL_SAMPLE_THRESHOLDS[k - 1] {
            let count = combinations(n_rows, k)?;
            Ok(usize::try_from(count).unwrap_or(usize::MAX))
        } else {
            Ok(k * Self::TRIALS_PER_SUBSAMPLE_ROW)
        }
    }
}

// ============================================================================
// Subset Sampler
// ============================================================================

/// Source of the sampler's random generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Reproducible sequence from a fixed seed.
    Fixed(u64),

    /// Seed drawn from operating-system entropy.
    Entropy,
}

/// Draws `k` distinct row indices per trial.
#[derive(Debug, Clone)]
pub struct SubsetSampler {
    rng: StdRng,
    n_rows: usize,
    subsample_size: usize,
}

impl SubsetSampler {
    /// Create a sampler over `n_rows` rows.
    ///
    /// # Errors
    ///
    /// * `InvalidSubsampleSize` if `subsample_size == 0`.
    /// * `TooFewPoints` if `subsample_size > n_rows`.
    pub fn new(source: SeedSource, n_rows: usize, subsample_size: usize) -> Result<Self, LmsError> {
        if subsample_size == 0 {
            return Err(LmsError::InvalidSubsampleSize(subsample_size));
        }
        if subsample_size > n_rows {
            return Err(LmsError::TooFewPoints {
                got: n_rows,
                min: subsample_size,
            });
        }

        let rng = match source {
            SeedSource::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedSource::Entropy => StdRng::from_os_rng(),
        };

        Ok(Self {
            rng,
            n_rows,
            subsample_size,
        })
    }

    /// Draw the indices of the next subsample.
    pub fn draw(&mut self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.subsample_size);
        self.draw_into(&mut indices);
        indices
    }

    /// Draw the next subsample into `buf`, replacing its contents.
    pub fn draw_into(&mut self, buf: &mut Vec<usize>) {
        buf.clear();
        buf.extend(index::sample(&mut self.rng, self.n_rows, self.subsample_size).iter());
        buf.sort_unstable();
    }
}
