//! Lower-bound search over a sorted boundary slice.
//!
//! Every query against an [`IntervalSet`][crate::set::IntervalSet] reduces to
//! a single lower-bound lookup: the number of boundaries strictly less than
//! the probe, together with a flag telling whether the probe hit a boundary
//! exactly. Two implementations exist behind the one contract: a linear scan
//! for short slices and a branch-free-ish binary search for longer ones. They
//! must agree on every input; the threshold is a tuning constant, not part of
//! the contract.

/// Slices shorter than this are scanned linearly.
pub(crate) const LINEAR_SEARCH_THRESHOLD: usize = 64;

/// Returns `(position, exact)` where `position` is the count of elements in
/// the sorted slice `s` that are strictly less than `e`, and `exact` is true
/// iff `s[position] == e`.
pub fn lower_bound<T: Ord>(s: &[T], e: &T) -> (usize, bool) {
    if s.len() < LINEAR_SEARCH_THRESHOLD {
        linear_search(s, e)
    } else {
        binary_search(s, e)
    }
}

pub(crate) fn linear_search<T: Ord>(s: &[T], e: &T) -> (usize, bool) {
    let n = s.len();
    let mut i = 0;
    while i < n && s[i] < *e {
        i += 1;
    }
    (i, i < n && s[i] == *e)
}

pub(crate) fn binary_search<T: Ord>(s: &[T], e: &T) -> (usize, bool) {
    let n = s.len();
    let (mut i, mut j) = (0, n);
    while i < j {
        // i <= h < j, no overflow for slice-sized indices
        let h = (i + j) >> 1;
        if s[h] < *e {
            i = h + 1;
        } else {
            j = h;
        }
    }
    (i, i < n && s[i] == *e)
}
