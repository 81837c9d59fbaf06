//! Best-candidate accumulator for the LMS search.
//!
//! ## Purpose
//!
//! The search folds every scored trial into a `BestCandidate`, which keeps
//! the model with the lowest median squared residual seen so far.
//!
//! ## Invariants
//!
//! * A candidate replaces the current best only if its median is strictly
//!   lower; on ties the earlier trial wins.
//! * A NaN median never replaces anything.
//! * The best median is `+∞` until the first candidate is accepted.

use crate::algorithms::regression::LinearModel;
use crate::algorithms::residuals::TrialScore;
use crate::math::linalg::FloatLinalg;

/// One scored trial.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    /// Trial number, in draw order.
    pub trial: usize,

    /// Row indices of the subsample.
    pub indices: Vec<usize>,

    /// Model fitted to the subsample.
    pub model: LinearModel<T>,

    /// Score of the model on the full dataset.
    pub score: TrialScore<T>,
}

/// Accumulator retaining the lowest-median candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct BestCandidate<T> {
    best: Option<Candidate<T>>,
    offered: usize,
}

impl<T: FloatLinalg> Default for BestCandidate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> BestCandidate<T> {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self {
            best: None,
            offered: 0,
        }
    }

    /// Offer a candidate; returns `true` if it became the new best.
    pub fn offer(&mut self, candidate: Candidate<T>) -> bool {
        self.offered += 1;
        if candidate.score.median < self.best_median() {
            self.best = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Median of the current best, or `+∞`.
    #[inline]
    pub fn best_median(&self) -> T {
        self.best
            .as_ref()
            .map_or_else(T::infinity, |c| c.score.median)
    }

    /// Number of candidates offered so far.
    #[inline]
    pub fn offered(&self) -> usize {
        self.offered
    }

    /// Consume the accumulator and return the best candidate.
    pub fn into_best(self) -> Option<Candidate<T>> {
        self.best
    }
}
