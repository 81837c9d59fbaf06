//! Order-statistic selection (Quickselect) for robust scoring.
//!
//! ## Purpose
//!
//! This module finds the k-th smallest element of a scratch buffer without
//! sorting it. The LMS search uses it to read the median squared residual of
//! every trial.
//!
//! ## Design notes
//!
//! * **Iterative**: The search range shrinks in a loop; there is no recursion.
//! * **Pivot**: Median-of-three of the first, middle and last element, moved to
//!   the rightmost slot of the range.
//! * **Partition**: Three-way (less | equal | greater). Exact fits produce long
//!   runs of zero residuals, which stay linear with an explicit equal band.
//! * **Memory**: O(1) extra space; the input slice is reordered in place.
//!
//! ## Invariants
//!
//! * After `select_nth(vals, k)`, `vals` is a permutation of its input.
//! * The returned value equals `sorted(vals)[k]` for totally ordered input.
//!
//! ## Non-goals
//!
//! * This module does not define an order for NaN; NaN values fall into the
//!   equal band of whichever pivot they meet.

use num_traits::Float;

// ============================================================================
// Selection
// ============================================================================

/// Return the element of rank `k` (0-based) and reorder `vals` in place.
///
/// Returns `None` if `k` is out of range.
pub fn select_nth<T: Float>(vals: &mut [T], k: usize) -> Option<T> {
    let n = vals.len();
    if k >= n {
        return None;
    }
    if n == 1 {
        return Some(vals[0]);
    }

    let mut lo = 0;
    let mut hi = n - 1;

    loop {
        if lo == hi {
            return Some(vals[lo]);
        }

        move_median_of_three_to_end(vals, lo, hi);
        let pivot = vals[hi];

        let (lt, gt) = partition_three_way(vals, lo, hi, pivot);

        if k < lt {
            hi = lt - 1;
        } else if k > gt {
            lo = gt + 1;
        } else {
            return Some(vals[k]);
        }
    }
}

/// Rank of the median used throughout the search: `floor(n / 2)`.
#[inline]
pub fn median_rank(n: usize) -> usize {
    n / 2
}

/// Median (rank `floor(n / 2)`) of `vals`, reordering it in place.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> Option<T> {
    select_nth(vals, median_rank(vals.len()))
}

// ============================================================================
// Partitioning
// ============================================================================

/// Order `vals[lo]`, `vals[mid]`, `vals[hi]` and park the median at `hi`.
#[inline]
fn move_median_of_three_to_end<T: Float>(vals: &mut [T], lo: usize, hi: usize) {
    let mid = lo + (hi - lo) / 2;

    if vals[mid] < vals[lo] {
        vals.swap(mid, lo);
    }
    if vals[hi] < vals[lo] {
        vals.swap(hi, lo);
    }
    if vals[hi] < vals[mid] {
        vals.swap(hi, mid);
    }

    // vals[lo] <= vals[mid] <= vals[hi]
    vals.swap(mid, hi);
}

/// Dutch-flag partition of `vals[lo..=hi]` around `pivot`.
///
/// Returns `(lt, gt)` such that `vals[lo..lt] < pivot`, `vals[lt..=gt]` is the
/// equal band and `vals[gt + 1..=hi] > pivot`. The pivot is taken from the
/// range, so the equal band is never empty.
fn partition_three_way<T: Float>(vals: &mut [T], lo: usize, hi: usize, pivot: T) -> (usize, usize) {
    let mut lt = lo;
    let mut i = lo;
    let mut gt = hi;

    while i <= gt {
        if vals[i] < pivot {
            vals.swap(lt, i);
            lt += 1;
            i += 1;
        } else if vals[i] > pivot {
            vals.swap(i, gt);
            gt -= 1;
        } else {
            i += 1;
        }
    }

    (lt, gt)
}
