//! Binomial coefficients for exhaustive trial counts.
//!
//! ## Purpose
//!
//! When the dataset is small, the number of distinct subsamples is lower
//! than the default trial budget; `combinations` supplies that count.
//!
//! ## Design notes
//!
//! * **Symmetry**: `r` is reduced to `min(r, n - r)` before accumulation.
//! * **Exactness**: The running product `C(n, i)` is an integer at every step,
//!   so each division is exact.
//! * **Overflow**: Checked arithmetic; overflow is reported, never wrapped.

use crate::primitives::errors::LmsError;

/// Number of ways to choose `r` items from `n`.
///
/// # Errors
///
/// * `CombinationDomain` if `r > n`.
/// * `CombinationOverflow` if an intermediate product exceeds `u64`.
pub fn combinations(n: usize, r: usize) -> Result<u64, LmsError> {
    if r > n {
        return Err(LmsError::CombinationDomain { n, r });
    }

    let r_small = r.min(n - r);
    let mut acc: u64 = 1;

    for i in 0..r_small {
        // acc == C(n, i) here; C(n, i + 1) = C(n, i) * (n - i) / (i + 1)
        let factor = (n - i) as u64;
        acc = acc
            .checked_mul(factor)
            .ok_or(LmsError::CombinationOverflow { n, r })?
            / (i as u64 + 1);
    }

    Ok(acc)
}
