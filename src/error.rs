//! Errors reported by the fixed-domain set types.
//!
//! The core algebra is total and has no error states; only the domain
//! specializations ([`AsciiSet`][crate::ascii::AsciiSet],
//! [`RuneSet`][crate::rune::RuneSet]) validate their inputs. Violations are
//! reported before anything mutates; values are never silently clamped.

use thiserror::Error;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value lies outside the fixed domain of the set.
    #[error("value {value:#x} is outside the domain [0, {max:#x}]")]
    ValueOutOfDomain { value: u32, max: u32 },

    /// An inclusive range with `high < low` was supplied.
    #[error("invalid inclusive range: high {high:#x} < low {low:#x}")]
    InvalidRange { low: u32, high: u32 },
}
