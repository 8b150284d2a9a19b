//! Error taxonomy for table validation and evaluation.
use core::fmt;

use thiserror::Error;

use crate::value::TimeUnit;

/// Which side of a breakpoint table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Domain,
    Range,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Domain => f.write_str("domain"),
            Axis::Range => f.write_str("range"),
        }
    }
}

/// Errors raised while validating a breakpoint table or evaluating queries against it.
///
/// Out-of-range queries are never errors; they resolve through the fill policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InterpError {
    /// Two neighbouring domain breakpoints hold the same value.
    #[error("zero-width interval at breakpoint {0}")]
    DegenerateInterval(i128),
    /// The table has fewer than two breakpoints.
    #[error("breakpoint table needs at least two entries, got {0}")]
    EmptyTable(usize),
    /// The match policy string is not one of `none`, `nearest`, `ffill`, `bfill`.
    #[error("unrecognized match method '{0}', expected one of none, nearest, ffill, bfill")]
    InvalidMethod(String),
    /// Exact inverse lookup was requested over a range with repeated values.
    #[error("range entries {first} and {second} hold the same value, exact inverse lookup is ambiguous")]
    AmbiguousTable { first: usize, second: usize },
    #[error("domain has {domain} breakpoints but range has {range}")]
    LengthMismatch { domain: usize, range: usize },
    #[error("{axis} breakpoints change direction at index {index}")]
    NotMonotonic { axis: Axis, index: usize },
    #[error("expected time unit {expected:?}, found {found:?}")]
    UnitMismatch {
        expected: Option<TimeUnit>,
        found: Option<TimeUnit>,
    },
    #[error("output buffer holds {found} entries for {expected} queries")]
    OutputLength { expected: usize, found: usize },
    #[error("interpolated value is not representable in the output type")]
    Unrepresentable,
}
