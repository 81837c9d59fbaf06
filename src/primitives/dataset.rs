//! In-memory regression dataset.
//!
//! ## Purpose
//!
//! This module provides `Dataset`, the immutable table the estimator works
//! on: one row per observation, a fixed number of numeric features, one
//! numeric target and a non-negative row weight.
//!
//! ## Design notes
//!
//! * **Storage**: Features are stored row-major in a single flat buffer.
//! * **Subsets**: `select_by_indices` copies the chosen rows into a new dataset;
//!   trial subsets are small, so copying beats indirection in the solver.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `features.len() == n_rows * n_features`.
//! * `targets.len() == weights.len() == n_rows`.
//! * Weights default to 1.
//!
//! ## Non-goals
//!
//! * This module does not parse files or encode categorical attributes.
//! * This module does not check values for finiteness (handled by `validator`).

use num_traits::Float;

use crate::primitives::errors::LmsError;

/// Numeric dataset with one target column and per-row weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    features: Vec<T>,
    targets: Vec<T>,
    weights: Vec<T>,
    n_features: usize,
    feature_names: Option<Vec<String>>,
}

impl<T: Float> Dataset<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a dataset from a row-major feature buffer and a target column.
    pub fn new(features: Vec<T>, targets: Vec<T>, n_features: usize) -> Result<Self, LmsError> {
        if features.len() != targets.len() * n_features {
            return Err(LmsError::MismatchedInputs {
                features_len: features.len(),
                rows: targets.len(),
                n_features,
            });
        }

        let weights = vec![T::one(); targets.len()];
        Ok(Self {
            features,
            targets,
            weights,
            n_features,
            feature_names: None,
        })
    }

    /// Create a dataset from a slice of feature rows.
    ///
    /// The feature count is taken from the first row; every other row must match it.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R], targets: &[T]) -> Result<Self, LmsError> {
        let n_features = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.len() != targets.len() {
            return Err(LmsError::MismatchedInputs {
                features_len: rows.len() * n_features,
                rows: targets.len(),
                n_features,
            });
        }

        let mut features = Vec::with_capacity(rows.len() * n_features);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_features {
                return Err(LmsError::DimensionMismatch {
                    expected: n_features,
                    got: row.len(),
                });
            }
            features.extend_from_slice(row);
        }

        Self::new(features, targets.to_vec(), n_features)
    }

    /// Replace the default unit row weights.
    pub fn with_weights(mut self, weights: Vec<T>) -> Result<Self, LmsError> {
        if weights.len() != self.targets.len() {
            return Err(LmsError::InvalidInput(format!(
                "{} weights for {} rows",
                weights.len(),
                self.targets.len()
            )));
        }
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < T::zero())
        {
            return Err(LmsError::InvalidNumericValue(format!(
                "weight[{}]={}",
                i,
                w.to_f64().unwrap_or(f64::NAN)
            )));
        }
        self.weights = weights;
        Ok(self)
    }

    /// Attach feature names used when describing a fitted model.
    pub fn with_feature_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, LmsError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.n_features {
            return Err(LmsError::DimensionMismatch {
                expected: self.n_features,
                got: names.len(),
            });
        }
        self.feature_names = Some(names);
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.targets.len()
    }

    /// Number of feature columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of attributes, counting the target column.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.n_features + 1
    }

    /// Whether the dataset has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Feature value at (`row`, `attr`).
    #[inline]
    pub fn value(&self, row: usize, attr: usize) -> T {
        self.features[row * self.n_features + attr]
    }

    /// Feature slice of one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.n_features;
        &self.features[start..start + self.n_features]
    }

    /// Target value of one row.
    #[inline]
    pub fn target(&self, row: usize) -> T {
        self.targets[row]
    }

    /// Weight of one row.
    #[inline]
    pub fn weight(&self, row: usize) -> T {
        self.weights[row]
    }

    /// Row-major feature buffer.
    #[inline]
    pub fn features(&self) -> &[T] {
        &self.features
    }

    /// Target column.
    #[inline]
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Row weights.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Targets are numeric by construction.
    #[inline]
    pub fn is_numeric_target(&self) -> bool {
        true
    }

    /// Whether the row has a missing (NaN) feature or target.
    pub fn has_missing(&self, row: usize) -> bool {
        self.targets[row].is_nan() || self.row(row).iter().any(|v| v.is_nan())
    }

    /// Name of feature `attr`, defaulting to `x1`, `x2`, ...
    pub fn feature_name(&self, attr: usize) -> String {
        match &self.feature_names {
            Some(names) => names[attr].clone(),
            None => format!("x{}", attr + 1),
        }
    }

    /// Attached feature names, if any.
    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    // ========================================================================
    // Subsets
    // ========================================================================

    /// Copy the rows at `indices` (in the given order) into a new dataset.
    pub fn select_by_indices(&self, indices: &[usize]) -> Self {
        let mut features = Vec::with_capacity(indices.len() * self.n_features);
        let mut targets = Vec::with_capacity(indices.len());
        let mut weights = Vec::with_capacity(indices.len());

        for &i in indices {
            features.extend_from_slice(self.row(i));
            targets.push(self.targets[i]);
            weights.push(self.weights[i]);
        }

        Self {
            features,
            targets,
            weights,
            n_features: self.n_features,
            feature_names: self.feature_names.clone(),
        }
    }

    /// Rebuild a dataset from raw parts without length checks.
    pub(crate) fn from_parts(
        features: Vec<T>,
        targets: Vec<T>,
        weights: Vec<T>,
        n_features: usize,
        feature_names: Option<Vec<String>>,
    ) -> Self {
        debug_assert_eq!(features.len(), targets.len() * n_features);
        debug_assert_eq!(targets.len(), weights.len());
        Self {
            features,
            targets,
            weights,
            n_features,
            feature_names,
        }
    }
}
