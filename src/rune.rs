//! Containment set specialized to Unicode code points.
//!
//! [`RuneSet`] wraps the generic [`IntervalSet`] with the fixed domain
//! `[U+0000, U+10FFFF]`. Elements are raw `u32` code points rather than
//! `char`: inclusive-range arithmetic (`high + 1`) has to be able to cross
//! the surrogate gap that `char` cannot represent. Domain validation happens
//! at this layer; out-of-domain values and inverted ranges are rejected with
//! an [`Error`], never clamped.

use std::fmt;

use log::debug;

use crate::ascii::AsciiSet;
use crate::error::Error;
use crate::search::lower_bound;
use crate::set::{Interval, IntervalSet};

/// The largest Unicode code point.
pub const RUNE_MAX: u32 = 0x10ffff;

/// The first non-ASCII code point, where [`RuneSet::split`] partitions.
const ASCII_SPLIT: u32 = 0x80;

/// A containment set for Unicode code points `[U+00..U+10FFFF]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuneSet {
    set: IntervalSet<u32>,
}

impl RuneSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            set: IntervalSet::new(),
        }
    }

    /// Creates a set from a canonical boundary sequence.
    pub fn from_boundaries(bounds: Vec<u32>) -> Self {
        Self {
            set: IntervalSet::from_boundaries(bounds),
        }
    }

    /// Returns the stored boundary sequence.
    pub fn boundaries(&self) -> &[u32] {
        self.set.boundaries()
    }

    /// Checks whether the set contains no code points.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Containment test for a single code point.
    pub fn contains(&self, r: u32) -> bool {
        self.set.contains(&r)
    }

    /// Adds a single code point to the set.
    pub fn insert(&mut self, r: u32) -> Result<(), Error> {
        self.insert_range(r, r)
    }

    /// Inserts an inclusive `[low, high]` range of code points.
    ///
    /// Unlike the intervals of the underlying encoding, the range is
    /// inclusive on both ends; `high == RUNE_MAX` translates to an
    /// open-ended interval.
    pub fn insert_range(&mut self, low: u32, high: u32) -> Result<(), Error> {
        if high < low {
            return Err(Error::InvalidRange { low, high });
        }
        if high > RUNE_MAX {
            return Err(Error::ValueOutOfDomain {
                value: high,
                max: RUNE_MAX,
            });
        }
        debug!("insert_range(low = {:#06x}, high = {:#06x})", low, high);
        self.insert_range_raw(low, high);
        Ok(())
    }

    fn insert_range_raw(&mut self, low: u32, high: u32) {
        if high == RUNE_MAX {
            self.set.insert_interval(low, low);
        } else {
            self.set.insert_interval(low, high + 1);
        }
    }

    /// Returns the set with inverted containment logic.
    pub fn inverted(&self) -> RuneSet {
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
    pub fn hull(&self) -> RuneSet {
        Self {
            set: self.set.hull(),
        }
    }

    /// Iterates over the contiguous inclusive `(low, high)` ranges of the
    /// set; the open tail is reported as `(low, RUNE_MAX)`.
    pub fn ranges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.set.intervals().map(|interval| match interval {
            Interval::Bounded { low, high } => (*low, *high - 1),
            Interval::Open { low } => (*low, RUNE_MAX),
        })
    }

    /// Counts the code points contained in the set.
    pub fn count_elements(&self) -> usize {
        self.ranges()
            .map(|(low, high)| (high - low) as usize + 1)
            .sum()
    }

    /// Combines multiple sets into one.
    pub fn merge<'a>(sets: impl IntoIterator<Item = &'a RuneSet>) -> RuneSet {
        let mut merged = RuneSet::new();
        for set in sets {
            for (low, high) in set.ranges() {
                merged.insert_range_raw(low, high);
            }
        }
        merged
    }

    /// Partitions the set at the ASCII boundary `0x80` into an ASCII subset
    /// and the non-ASCII remainder.
    ///
    /// A synthetic boundary is introduced at `0x80` only when it falls
    /// strictly inside an existing interval; an open ASCII tail turns into
    /// an open remainder starting at `0x80`.
    pub fn split(&self) -> (AsciiSet, RuneSet) {
        let bounds = &self.set.bounds;
        let n = bounds.len();
        if n == 0 {
            return (AsciiSet::new(), RuneSet::new());
        }
        if bounds[0] >= ASCII_SPLIT {
            return (AsciiSet::new(), self.clone());
        }
        if bounds[n - 1] < ASCII_SPLIT {
            // Everything stored is ASCII; an open tail spills over into an
            // open non-ASCII remainder.
            let ascii = downcast(bounds);
            let rest = if self.set.ends_open() {
                RuneSet::from_boundaries(vec![ASCII_SPLIT])
            } else {
                RuneSet::new()
            };
            return (ascii, rest);
        }

        debug!("split: {} boundaries straddle {:#06x}", n, ASCII_SPLIT);
        let (pos, exact) = lower_bound(bounds, &ASCII_SPLIT);
        let ascii = downcast(&bounds[..pos]);

        let closed_at_split = pos & 1 == 0;
        let rest = if exact && !closed_at_split {
            // 0x80 is an upper bound: it opens the remainder instead.
            bounds[pos + 1..].to_vec()
        } else if !exact && !closed_at_split {
            // 0x80 falls strictly inside an interval: synthesize a boundary.
            let mut v = Vec::with_capacity(n - pos + 1);
            v.push(ASCII_SPLIT);
            v.extend_from_slice(&bounds[pos..]);
            v
        } else {
            bounds[pos..].to_vec()
        };
        (ascii, RuneSet::from_boundaries(rest))
    }
}

/// Narrows a boundary slice known to lie below `0x80` to bytes.
fn downcast(bounds: &[u32]) -> AsciiSet {
    AsciiSet::from_boundaries(bounds.iter().map(|&r| r as u8).collect())
}

fn write_rune(f: &mut fmt::Formatter<'_>, r: u32) -> fmt::Result {
    match r {
        0x08 => f.write_str("\\b"),
        0x0c => f.write_str("\\f"),
        0x0a => f.write_str("\\n"),
        0x0d => f.write_str("\\r"),
        0x09 => f.write_str("\\t"),
        _ => {
            if r > RUNE_MAX {
                f.write_str("#INVALID")
            } else if r > 0xffff {
                write!(f, "\\U{:08X}", r)
            } else if r > 0x7f {
                write!(f, "\\u{:04X}", r)
            } else if r < 0x20 || r == 0x7f {
                write!(f, "\\x{:02X}", r)
            } else {
                // only reachable for printable ASCII
                write!(f, "{}", char::from_u32(r).unwrap_or('\u{fffd}'))
            }
        }
    }
}

/// Compact character-class form with `\xNN`, `\uNNNN` and `\UNNNNNNNN`
/// escapes for non-printable or non-ASCII code points.
impl fmt::Display for RuneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (low, high) in self.ranges() {
            write_rune(f, low)?;
            if high > low {
                if high > low + 1 {
                    f.write_str("-")?;
                }
                write_rune(f, high)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[track_caller]
    fn check_split(bounds: &[u32], want_ascii: &[u8], want_rest: &[u32]) {
        let set = RuneSet::from_boundaries(bounds.to_vec());
        let (ascii, rest) = set.split();
        assert_eq!(
            (ascii.boundaries(), rest.boundaries()),
            (want_ascii, want_rest),
            "split of {bounds:x?}"
        );
    }

    #[test]
    fn test_split_empty() {
        check_split(&[], &[], &[]);
    }

    #[test]
    fn test_split_bounded() {
        check_split(&[0x00, 0x01], &[0x00, 0x01], &[]);
        check_split(&[0x00, 0x7f], &[0x00, 0x7f], &[]);
        check_split(&[0x00, 0x80], &[0x00], &[]);
        check_split(&[0x00, 0x90], &[0x00], &[0x80, 0x90]);
        check_split(&[0x7f, 0x90], &[0x7f], &[0x80, 0x90]);
        check_split(&[0x80, 0x90], &[], &[0x80, 0x90]);
        check_split(&[0x85, 0x90], &[], &[0x85, 0x90]);
        check_split(&[0x00, 0x01, 0x60, 0x7f], &[0x00, 0x01, 0x60, 0x7f], &[]);
        check_split(&[0x00, 0x01, 0x60, 0x80], &[0x00, 0x01, 0x60], &[]);
        check_split(&[0x00, 0x01, 0x60, 0x81], &[0x00, 0x01, 0x60], &[0x80, 0x81]);
        check_split(&[0x00, 0x01, 0x7f, 0x81], &[0x00, 0x01, 0x7f], &[0x80, 0x81]);
        check_split(&[0x00, 0x01, 0x80, 0x81], &[0x00, 0x01], &[0x80, 0x81]);
        check_split(&[0x00, 0x01, 0x90, 0x91], &[0x00, 0x01], &[0x90, 0x91]);
        check_split(&[0x00, 0x7f, 0x90, 0x91], &[0x00, 0x7f], &[0x90, 0x91]);
        check_split(&[0x00, 0x80, 0x90, 0x91], &[0x00], &[0x90, 0x91]);
        check_split(&[0x00, 0x81, 0x90, 0x91], &[0x00], &[0x80, 0x81, 0x90, 0x91]);
        check_split(&[0x7e, 0x7f, 0x91, 0x92], &[0x7e, 0x7f], &[0x91, 0x92]);
        check_split(&[0x7e, 0x80, 0x91, 0x92], &[0x7e], &[0x91, 0x92]);
        check_split(&[0x7f, 0x80, 0x91, 0x92], &[0x7f], &[0x91, 0x92]);
        check_split(&[0x7f, 0x81, 0x91, 0x92], &[0x7f], &[0x80, 0x81, 0x91, 0x92]);
        check_split(&[0x80, 0x81, 0x91, 0x92], &[], &[0x80, 0x81, 0x91, 0x92]);
        check_split(&[0x81, 0x91, 0x92, 0x93], &[], &[0x81, 0x91, 0x92, 0x93]);
    }

    #[test]
    fn test_split_open_ended() {
        check_split(&[0x00], &[0x00], &[0x80]);
        check_split(&[0x7f], &[0x7f], &[0x80]);
        check_split(&[0x80], &[], &[0x80]);
        check_split(&[0x100], &[], &[0x100]);
        check_split(&[0x00, 0x20, 0x7f], &[0x00, 0x20, 0x7f], &[0x80]);
        check_split(&[0x00, 0x20, 0x80], &[0x00, 0x20], &[0x80]);
        check_split(&[0x00, 0x20, 0x90], &[0x00, 0x20], &[0x90]);
        check_split(&[0x00, 0x7f, 0x90], &[0x00, 0x7f], &[0x90]);
        check_split(&[0x00, 0x80, 0x90], &[0x00], &[0x90]);
        check_split(&[0x00, 0x85, 0x90], &[0x00], &[0x80, 0x85, 0x90]);
        check_split(&[0x7f, 0x85, 0x90], &[0x7f], &[0x80, 0x85, 0x90]);
        check_split(&[0x80, 0x85, 0x90], &[], &[0x80, 0x85, 0x90]);
    }

    #[test]
    fn test_split_preserves_containment() {
        let set = RuneSet::from_boundaries(vec![0x10, 0x85, 0x90, 0x2000]);
        let (ascii, rest) = set.split();
        for r in 0..0x3000u32 {
            let got = if r < 0x80 {
                ascii.contains(r as u8)
            } else {
                rest.contains(r)
            };
            assert_eq!(got, set.contains(r), "r = {r:#x}");
        }
    }

    #[test]
    fn test_string() {
        let render = |b: &[u32]| RuneSet::from_boundaries(b.to_vec()).to_string();
        assert_eq!(render(&[]), "");
        assert_eq!(render(&[0x00]), "\\x00-\\U0010FFFF");
        assert_eq!(render(&[0x00, ' ' as u32 + 1]), "\\x00- ");
        assert_eq!(render(&['a' as u32, 'z' as u32 + 1]), "a-z");
        assert_eq!(render(&['α' as u32, 'ω' as u32 + 1]), "\\u03B1-\\u03C9");
        assert_eq!(render(&[0x00, 0x80]), "\\x00-\\x7F");
    }

    #[test]
    fn test_inverted() {
        assert_eq!(RuneSet::new().inverted().boundaries(), [0]);

        let mut s = RuneSet::new();
        s.insert_range(0x00, RUNE_MAX).unwrap();
        assert_eq!(s.boundaries(), [0x00]);
        assert!(s.inverted().is_empty());

        let mut lower = RuneSet::new();
        lower.insert_range('a' as u32, 'z' as u32).unwrap();
        let not_lower = lower.inverted();
        for r in [0x00, 'a' as u32 - 1, 'a' as u32, 'z' as u32, 'z' as u32 + 1, RUNE_MAX] {
            assert_eq!(not_lower.contains(r), !lower.contains(r), "r = {r:#x}");
        }
        assert_eq!(not_lower.inverted(), lower);
    }

    #[test]
    fn test_count_elements() {
        assert_eq!(RuneSet::new().count_elements(), 0);

        let mut s = RuneSet::new();
        s.insert_range(0x00, RUNE_MAX).unwrap();
        assert_eq!(s.count_elements(), 0x110000);

        let mut s = RuneSet::new();
        s.insert(0x41).unwrap();
        s.insert_range(0x80, 0x8f).unwrap();
        assert_eq!(s.count_elements(), 17);
    }

    #[test]
    fn test_merge() {
        let mut lower = RuneSet::new();
        lower.insert_range('a' as u32, 'z' as u32).unwrap();
        let mut upper = RuneSet::new();
        upper.insert_range('A' as u32, 'Z' as u32).unwrap();
        let mut greek = RuneSet::new();
        greek.insert_range(0x391, 0x3a9).unwrap();

        let merged = RuneSet::merge([&lower, &upper, &greek]);
        assert!(merged.contains('q' as u32));
        assert!(merged.contains('Q' as u32));
        assert!(merged.contains(0x3a0));
        assert!(!merged.contains('0' as u32));
        assert_eq!(
            merged.count_elements(),
            lower.count_elements() + upper.count_elements() + greek.count_elements()
        );
    }

    #[test]
    fn test_rejects_out_of_domain() {
        let mut s = RuneSet::new();
        let before = s.clone();
        assert_eq!(
            s.insert(RUNE_MAX + 1),
            Err(Error::ValueOutOfDomain {
                value: RUNE_MAX + 1,
                max: RUNE_MAX
            })
        );
        assert_eq!(
            s.insert_range(0x20, 0x10),
            Err(Error::InvalidRange {
                low: 0x20,
                high: 0x10
            })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn test_insert_max_goes_open() {
        let mut s = RuneSet::new();
        s.insert(RUNE_MAX).unwrap();
        assert_eq!(s.boundaries(), [RUNE_MAX]);
        assert!(s.contains(RUNE_MAX));
        assert_eq!(s.count_elements(), 1);
    }
}
