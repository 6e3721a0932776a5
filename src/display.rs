//! Human-readable rendering of an interval set.
//!
//! The format is a concatenation of the encoded intervals: `[l,h)` per
//! bounded interval, and `[l...` for a trailing open-ended one, e.g.
//! `[3,5)[8...`. It exists for debugging and tests and is not part of the
//! algebraic contract.

use std::fmt;

use crate::set::{Interval, IntervalSet};

impl<T: fmt::Display> fmt::Display for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for interval in self.intervals() {
            match interval {
                Interval::Bounded { low, high } => write!(f, "[{},{})", low, high)?,
                Interval::Open { low } => write!(f, "[{}...", low)?,
            }
        }
        Ok(())
    }
}
