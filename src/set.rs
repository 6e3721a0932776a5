//! The canonical boundary-array representation of an interval set.
//!
//! An [`IntervalSet`] is a compacted, flattened encoding of a set of values
//! drawn from a totally ordered domain. Instead of a bitmap or a hash set it
//! stores a sorted sequence of *boundaries*: values with even indices are
//! inclusive lower bounds, values with odd indices are exclusive upper bounds,
//! so adjacent even/odd elements pair up into half-open `[low, high)`
//! intervals. If the total number of boundaries is odd, the final unpaired
//! element starts an open-ended interval covering everything at or above it:
//!
//! ```text
//! boundaries: A B C D E F G
//! meaning:    [ ) [ ) [ ) [
//! ```
//!
//! # Invariants
//!
//! - Boundaries are strictly increasing (sorted, no duplicates).
//! - The encoding is canonical: no two encoded intervals touch or overlap.
//!   Every mutating operation ([`insert_interval`][IntervalSet::insert_interval],
//!   [`join`][IntervalSet::join]) restores this form.
//!
//! The open-tail parity convention is easy to misread, so it is centralized
//! here: [`IntervalSet::ends_open`] is the only place that inspects the
//! length parity, and enumeration goes through the explicit [`Interval`]
//! enum rather than a sentinel encoding.

use crate::search::lower_bound;

/// A set of values encoded as a sorted sequence of interval boundaries.
///
/// See the [module documentation][self] for the encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalSet<T> {
    pub(crate) bounds: Vec<T>,
}

/// A single encoded interval, as yielded by [`IntervalSet::intervals`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interval<T> {
    /// A bounded half-open interval `[low, high)`.
    Bounded { low: T, high: T },
    /// An open-ended interval `[low, ...` extending to the domain maximum.
    Open { low: T },
}

impl<T> IntervalSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { bounds: Vec::new() }
    }

    /// Returns the stored boundary sequence.
    pub fn boundaries(&self) -> &[T] {
        &self.bounds
    }

    /// Checks whether the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Checks whether the set ends with an open-ended interval.
    ///
    /// This is the single place where the length-parity convention is
    /// interpreted.
    pub fn ends_open(&self) -> bool {
        self.bounds.len() & 1 == 1
    }

    /// Iterates over the encoded intervals in increasing order.
    pub fn intervals(&self) -> Intervals<'_, T> {
        Intervals { rest: &self.bounds }
    }
}

impl<T: Ord> IntervalSet<T> {
    /// Creates a set from a boundary sequence that is already in canonical
    /// form (strictly increasing).
    pub fn from_boundaries(bounds: Vec<T>) -> Self {
        debug_assert!(
            bounds.windows(2).all(|w| w[0] < w[1]),
            "boundaries must be strictly increasing"
        );
        Self { bounds }
    }

    /// Containment test for a single value.
    ///
    /// With `(i, exact) = lower_bound(boundaries, e)`, the value is contained
    /// iff `(i is even) == exact`: an even position means `e` sits at or
    /// after an inclusive lower bound (inside an interval or the open tail),
    /// and the `exact` term reclassifies a hit on an exclusive upper bound
    /// (odd position) as excluded and a hit on an inclusive lower bound
    /// (even position) as included.
    pub fn contains(&self, e: &T) -> bool {
        let (i, exact) = lower_bound(&self.bounds, e);
        (i & 1 == 0) == exact
    }
}

impl<T: Ord + Clone> IntervalSet<T> {
    /// Returns the smallest set with at most one interval covering all of
    /// `self`.
    pub fn hull(&self) -> Self {
        let n = self.bounds.len();
        if n <= 2 {
            self.clone()
        } else if self.ends_open() {
            Self {
                bounds: vec![self.bounds[0].clone()],
            }
        } else {
            Self {
                bounds: vec![self.bounds[0].clone(), self.bounds[n - 1].clone()],
            }
        }
    }
}

/// Iterator over the encoded intervals of an [`IntervalSet`].
#[derive(Debug, Clone)]
pub struct Intervals<'a, T> {
    rest: &'a [T],
}

impl<'a, T> Iterator for Intervals<'a, T> {
    type Item = Interval<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.rest {
            [] => None,
            [low] => {
                self.rest = &[];
                Some(Interval::Open { low })
            }
            [low, high, rest @ ..] => {
                self.rest = rest;
                Some(Interval::Bounded { low, high })
            }
        }
    }
}
