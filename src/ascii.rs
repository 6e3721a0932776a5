//! Containment set specialized to 7-bit ASCII.
//!
//! [`AsciiSet`] wraps the generic [`IntervalSet`] with the fixed domain
//! `[0x00, 0x7F]`. Knowing the domain maximum enables the conveniences the
//! generic algebra cannot offer: complementing the set, inserting fully
//! inclusive ranges (translated to the half-open/open-ended encoding), and
//! counting contained values.
//!
//! Out-of-domain values and inverted ranges are rejected with an
//! [`Error`] before anything mutates; they are never clamped.

use std::fmt;

use log::debug;

use crate::error::Error;
use crate::set::{Interval, IntervalSet};

/// The largest value in the ASCII domain.
pub const ASCII_MAX: u8 = 0x7f;

/// A containment set for 7-bit ASCII characters `[\x00..\x7f]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiSet {
    set: IntervalSet<u8>,
}

impl AsciiSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            set: IntervalSet::new(),
        }
    }

    /// Creates a set from a canonical boundary sequence.
    pub fn from_boundaries(bounds: Vec<u8>) -> Self {
        Self {
            set: IntervalSet::from_boundaries(bounds),
        }
    }

    /// Returns the stored boundary sequence.
    pub fn boundaries(&self) -> &[u8] {
        self.set.boundaries()
    }

    /// Checks whether the set contains no characters.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Containment test for a single character.
    pub fn contains(&self, c: u8) -> bool {
        self.set.contains(&c)
    }

    /// Adds a single character to the set.
    pub fn insert(&mut self, c: u8) -> Result<(), Error> {
        self.insert_range(c, c)
    }

    /// Inserts an inclusive `[low, high]` range of characters.
    ///
    /// Unlike the intervals of the underlying encoding, the range is
    /// inclusive on both ends; `high == 0x7F` translates to an open-ended
    /// interval.
    pub fn insert_range(&mut self, low: u8, high: u8) -> Result<(), Error> {
        if high < low {
            return Err(Error::InvalidRange {
                low: low as u32,
                high: high as u32,
            });
        }
        if high > ASCII_MAX {
            return Err(Error::ValueOutOfDomain {
                value: high as u32,
                max: ASCII_MAX as u32,
            });
        }
        debug!("insert_range(low = {:#04x}, high = {:#04x})", low, high);
        self.insert_range_raw(low, high);
        Ok(())
    }

    /// Inclusive-range insertion for in-domain ranges.
    fn insert_range_raw(&mut self, low: u8, high: u8) {
        if high == ASCII_MAX {
            self.set.insert_interval(low, low);
        } else {
            self.set.insert_interval(low, high + 1);
        }
    }

    /// Returns the set with inverted containment logic.
    ///
    /// The complement toggles an implicit leading zero boundary.
    pub fn inverted(&self) -> AsciiSet {
        let bounds = &self.set.bounds;
        let inverted = if bounds.is_empty() {
            vec![0]
        } else if bounds[0] == 0 {
            bounds[1..].to_vec()
        } else {
            let mut v = Vec::with_capacity(bounds.len() + 1);
            v.push(0);
            v.extend_from_slice(bounds);
            v
        };
        Self::from_boundaries(inverted)
    }

    /// Returns the smallest set with at most one interval covering `self`.
    pub fn hull(&self) -> AsciiSet {
        Self {
            set: self.set.hull(),
        }
    }

    /// Iterates over the contiguous inclusive `(low, high)` ranges of the
    /// set; the open tail is reported as `(low, 0x7F)`.
    pub fn ranges(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.set.intervals().map(|interval| match interval {
            Interval::Bounded { low, high } => (*low, *high - 1),
            Interval::Open { low } => (*low, ASCII_MAX),
        })
    }

    /// Counts the characters contained in the set.
    pub fn count_elements(&self) -> usize {
        self.ranges()
            .map(|(low, high)| (high - low) as usize + 1)
            .sum()
    }

    /// Combines multiple sets into one.
    pub fn merge<'a>(sets: impl IntoIterator<Item = &'a AsciiSet>) -> AsciiSet {
        let mut merged = AsciiSet::new();
        for set in sets {
            for (low, high) in set.ranges() {
                merged.insert_range_raw(low, high);
            }
        }
        merged
    }
}

fn write_ascii(f: &mut fmt::Formatter<'_>, c: u8) -> fmt::Result {
    match c {
        0x08 => f.write_str("\\b"),
        0x0c => f.write_str("\\f"),
        b'\n' => f.write_str("\\n"),
        b'\r' => f.write_str("\\r"),
        b'\t' => f.write_str("\\t"),
        0x20..=0x7e => write!(f, "{}", c as char),
        _ => write!(f, "\\x{:02X}", c),
    }
}

/// Compact character-class form: single characters as themselves, adjacent
/// pairs back to back, longer runs as `a-z`, with control characters
/// escaped.
impl fmt::Display for AsciiSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (low, high) in self.ranges() {
            write_ascii(f, low)?;
            if high > low {
                if high > low + 1 {
                    f.write_str("-")?;
                }
                write_ascii(f, high)?;
            }
        }
        Ok(())
    }
}
