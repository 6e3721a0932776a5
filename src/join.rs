//! Lossy simplification over a "don't-care" interval.
//!
//! [`IntervalSet::join`] is the one deliberately lossy operation in the
//! algebra. Given a region `[l, h)` whose containment answers the caller no
//! longer cares about, it may fill gaps and merge intervals across that
//! region, shrinking the stored boundary count. The contract is stated from
//! the outside in: for every element below `l` or at/above `h` the result of
//! [`contains`][IntervalSet::contains] is exactly what it was before the
//! call. Inside the region the answers are unspecified.

use log::trace;

use crate::search::lower_bound;
use crate::set::IntervalSet;

impl<T: Ord> IntervalSet<T> {
    /// Collapses structure inside the don't-care region `[low, high)`
    /// (or `[low, ...` when `low >= high`), preserving containment results
    /// for every element outside the region.
    pub fn join(&mut self, low: T, high: T) {
        trace!("join: {} boundaries before", self.bounds.len());
        let n = self.bounds.len();
        if n == 0 || self.bounds[n - 1] <= low {
            return;
        }

        if high <= low {
            // Open region: everything from low's interval onward collapses
            // into a single tail.
            let (mut i, _) = lower_bound(&self.bounds, &low);
            if i & 1 == 0 {
                i += 1;
            }
            if self.ends_open() {
                self.bounds.truncate(i);
            } else {
                // The set ends closed: keep its final upper bound as the new
                // tail end, so the join never extends coverage past the data
                // it already stored.
                if let Some(last) = self.bounds.pop() {
                    self.bounds.truncate(i);
                    self.bounds.push(last);
                }
            }
            return;
        }
        if high <= self.bounds[0] {
            return;
        }

        let (mut li, _) = lower_bound(&self.bounds, &low);
        let (hi_rel, h_exact) = lower_bound(&self.bounds[li..], &high);
        let mut hi = hi_rel + li;

        // Round li up to the first slot strictly inside the region; adjust
        // hi for whether high hits a boundary exactly or lands inside an
        // interval, so that boundaries carrying behavior outside the region
        // are retained.
        if li & 1 == 0 {
            li += 1;
        }
        let h_inside = hi & 1 == 1;
        if h_exact && !h_inside {
            hi += 1;
        } else if !h_exact && !h_inside {
            hi -= 1;
        }
        if hi > li {
            self.bounds.drain(li..hi);
        }
    }
}
