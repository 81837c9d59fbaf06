//! One-shot data cleaning ahead of the LMS search.
//!
//! ## Purpose
//!
//! Rows without a target cannot be scored and feature gaps cannot be
//! multiplied through a model. This module removes the former and fills
//! the latter once, before the search sees the data.
//!
//! ## Design notes
//!
//! * **Missing marker**: NaN.
//! * **Targets**: Rows with a NaN target are dropped; their original indices are kept.
//! * **Features**: NaN feature values are replaced by the mean of the observed
//!   values of that column over the retained rows (0 if none were observed).
//!
//! ## Non-goals
//!
//! * This module does not encode categorical attributes.

use num_traits::Float;

use crate::primitives::dataset::Dataset;

/// Outcome of preprocessing.
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessed<T: Float> {
    /// Cleaned dataset.
    pub data: Dataset<T>,

    /// Original indices of rows dropped for a missing target.
    pub dropped_rows: Vec<usize>,

    /// Number of feature values replaced by a column mean.
    pub imputed_values: usize,
}

/// Missing-value handling.
pub struct Preprocessor;

impl Preprocessor {
    /// Drop rows with a missing target, then impute missing features.
    pub fn run<T: Float>(data: &Dataset<T>) -> Preprocessed<T> {
        let (kept, dropped_rows) = Self::drop_missing_targets(data);
        let (data, imputed_values) = Self::impute_means(kept);

        Preprocessed {
            data,
            dropped_rows,
            imputed_values,
        }
    }

    /// Remove rows whose target is NaN.
    pub fn drop_missing_targets<T: Float>(data: &Dataset<T>) -> (Dataset<T>, Vec<usize>) {
        let (kept, dropped): (Vec<usize>, Vec<usize>) =
            (0..data.n_rows()).partition(|&i| !data.target(i).is_nan());

        if dropped.is_empty() {
            return (data.clone(), dropped);
        }
        (data.select_by_indices(&kept), dropped)
    }

    /// Replace NaN feature values with their column mean.
    pub fn impute_means<T: Float>(data: Dataset<T>) -> (Dataset<T>, usize) {
        let n_features = data.n_features();
        if !data.features().iter().any(|v| v.is_nan()) {
            return (data, 0);
        }

        let mut sums = vec![T::zero(); n_features];
        let mut counts = vec![0usize; n_features];
        for i in 0..data.n_rows() {
            for (j, &v) in data.row(i).iter().enumerate() {
                if !v.is_nan() {
                    sums[j] = sums[j] + v;
                    counts[j] += 1;
                }
            }
        }

        let means: Vec<T> = sums
            .iter()
            .zip(&counts)
            .map(|(&s, &c)| if c == 0 { T::zero() } else { s / T::from(c).unwrap() })
            .collect();

        let mut imputed = 0;
        let features: Vec<T> = data
            .features()
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                if v.is_nan() {
                    imputed += 1;
                    means[i % n_features]
                } else {
                    v
                }
            })
            .collect();

        let names = data.feature_names().map(<[String]>::to_vec);
        let cleaned = Dataset::from_parts(
            features,
            data.targets().to_vec(),
            data.weights().to_vec(),
            n_features,
            names,
        );
        (cleaned, imputed)
    }
}
