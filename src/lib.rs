//! # ics-rs: Interval Containment Sets in Rust
//!
//! **`ics-rs`** is a compact encoding of sets drawn from a totally ordered
//! domain, represented as a sorted sequence of interval boundaries rather
//! than a bitmap or a hash set. It is built for domains such as character
//! classes in pattern matchers, where sets are sparse, ranges dominate, and
//! containment tests and set algebra must be fast and memory-compact.
//!
//! ## The encoding
//!
//! A set is a strictly increasing vector of *boundaries*. Adjacent even/odd
//! elements pair up into half-open `[low, high)` intervals; an odd total
//! count means the final boundary starts an open-ended interval reaching the
//! domain maximum:
//!
//! ```text
//! boundaries: A B C D E F G
//! meaning:    [ ) [ ) [ ) [
//! ```
//!
//! The encoding is **canonical**: no two encoded intervals touch or overlap,
//! so every set has exactly one representation. All mutating operations
//! restore this form.
//!
//! ## Key operations
//!
//! - [`IntervalSet::contains`][crate::set::IntervalSet::contains] — one
//!   lower-bound lookup, linear below a size threshold, binary above it.
//! - [`IntervalSet::insert_interval`][crate::set::IntervalSet::insert_interval]
//!   — coalescing union of a bounded or open-ended interval.
//! - [`IntervalSet::join`][crate::set::IntervalSet::join] — lossy
//!   simplification over a "don't-care" region, preserving containment
//!   results everywhere outside it.
//! - [`IntervalSet::hull`][crate::set::IntervalSet::hull] — the smallest
//!   single-interval cover.
//!
//! ## Basic Usage
//!
//! ```rust
//! use ics_rs::set::IntervalSet;
//!
//! let mut s = IntervalSet::new();
//! s.insert_interval(3u32, 5);
//! s.insert_interval(8, 8); // low >= high inserts the open interval [8...
//! assert_eq!(s.to_string(), "[3,5)[8...");
//!
//! assert!(s.contains(&4));
//! assert!(!s.contains(&5));
//! assert!(s.contains(&1000)); // inside the open tail
//!
//! // Touching intervals coalesce back into canonical form.
//! s.insert_interval(5, 8);
//! assert_eq!(s.to_string(), "[3...");
//! ```
//!
//! ## Domain specializations
//!
//! [`AsciiSet`][crate::ascii::AsciiSet] (over `[0x00, 0x7F]`) and
//! [`RuneSet`][crate::rune::RuneSet] (over `[U+0000, U+10FFFF]`) add the
//! conveniences a fixed domain maximum makes possible: inclusive-range
//! insertion, complement, element counting, multi-set merge, escaped
//! character-class rendering, and (for runes) splitting at the ASCII
//! boundary. Out-of-domain inputs are rejected with a recoverable
//! [`Error`][crate::error::Error], never clamped.
//!
//! ```rust
//! use ics_rs::ascii::AsciiSet;
//!
//! let mut digits = AsciiSet::new();
//! digits.insert_range(b'0', b'9')?;
//! assert_eq!(digits.to_string(), "0-9");
//! assert_eq!(digits.count_elements(), 10);
//! assert!(digits.inverted().contains(b'a'));
//! # Ok::<(), ics_rs::error::Error>(())
//! ```

pub mod ascii;
pub mod error;
pub mod rune;
pub mod search;
pub mod set;

mod display;
mod insert;
mod join;
