//! Coalescing interval insertion.
//!
//! [`IntervalSet::insert_interval`] merges a new interval into the set,
//! absorbing every existing interval it overlaps or touches and restoring
//! the canonical boundary form. The many edge cases (open-ended requests,
//! exact boundary hits, fully nested intervals, gap landings) all reduce to
//! a pair of lower-bound lookups plus a small amount of parity bookkeeping
//! on the found positions.

use log::trace;

use crate::search::lower_bound;
use crate::set::IntervalSet;

impl<T: Ord> IntervalSet<T> {
    /// Merges an interval into the set.
    ///
    /// - if `low < high`, the bounded half-open interval `[low, high)` is
    ///   merged in;
    /// - if `low >= high`, the open-ended interval `[low, ...` is merged
    ///   instead (`high` only signals open-endedness).
    ///
    /// Any existing intervals that overlap or touch the new one are
    /// coalesced into a single interval; at most two new boundary values are
    /// introduced. The result is always canonical.
    pub fn insert_interval(&mut self, low: T, high: T) {
        trace!("insert_interval: {} boundaries before", self.bounds.len());
        if high <= low {
            self.insert_open(low);
        } else {
            self.insert_bounded(low, high);
        }
    }

    /// Merges the open-ended interval `[l, ...` into the set.
    fn insert_open(&mut self, l: T) {
        let n = self.bounds.len();
        if n == 0 {
            self.bounds.push(l);
            return;
        }
        if self.bounds[n - 1] < l {
            // Strictly after everything stored: extend only if the set
            // currently ends closed; an open tail already covers l.
            if !self.ends_open() {
                self.bounds.push(l);
            }
            return;
        }

        let (i, exact) = lower_bound(&self.bounds, &l);
        if i & 1 == 0 {
            // l lands in a gap or exactly on a lower bound: everything from
            // here up is swallowed by the open tail.
            self.bounds.truncate(i + 1);
            if !exact {
                self.bounds[i] = l;
            }
        } else {
            // l lands strictly inside a closed interval: drop its upper
            // bound so the interval itself becomes the open tail.
            self.bounds.truncate(i);
        }
    }

    /// Merges the bounded interval `[l, h)` into the set. Requires `l < h`.
    fn insert_bounded(&mut self, l: T, h: T) {
        let n = self.bounds.len();
        if n == 0 {
            self.bounds.push(l);
            self.bounds.push(h);
            return;
        }
        if self.bounds[n - 1] < l {
            if !self.ends_open() {
                self.bounds.push(l);
                self.bounds.push(h);
            }
            return;
        }
        if h < self.bounds[0] {
            self.bounds.splice(0..0, [l, h]);
            return;
        }

        // Positions are classified against the encoded structure:
        //
        //        [       )       [       )
        //  ..z.. b ..x.. e ..z.. b ..x.. e
        //
        // b: exactly on a lower bound, e: exactly on an upper bound,
        // x: strictly inside an interval, z: in a gap.

        let (mut li, l_exact) = lower_bound(&self.bounds, &l);
        let l_inside = li & 1 == 1;
        let l_absorbed = l_exact || l_inside;
        let l_on_lower = l_absorbed && !l_inside;

        let (hi_rel, h_exact) = lower_bound(&self.bounds[li..], &h);
        let mut hi = hi_rel + li;
        let h_inside = hi & 1 == 1;
        let h_absorbed = h_exact || h_inside;
        let h_on_lower = h_exact && !h_inside;

        if l_absorbed || h_absorbed {
            if l_on_lower {
                li += 1;
            }
            if h_on_lower {
                hi += 1;
            }
            if l_absorbed != h_absorbed {
                hi -= 1;
            }
            self.bounds.drain(li..hi);
            if !h_absorbed {
                self.bounds[li] = h;
            }
            if !l_absorbed {
                self.bounds[li] = l;
            }
        } else if li == hi {
            // Nothing in between: two fresh boundaries.
            self.bounds.splice(hi..hi, [l, h]);
        } else {
            // Spans intervening structure without touching it at the edges:
            // reuse the first two slots, delete the rest.
            if li + 2 < hi {
                self.bounds.drain(li + 2..hi);
            }
            self.bounds[li] = l;
            self.bounds[li + 1] = h;
        }
    }
}
