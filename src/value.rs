//! Integer-like values: plain fixed-width integers, and timestamps that carry
//! their resolution through interpolation untouched.
use core::fmt;

use num_traits::NumCast;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value exactly representable as a fixed-width integer.
///
/// Arithmetic only ever sees the magnitude; the unit tag (if any) of a result
/// is copied from the breakpoint it was derived from.
pub trait IntegerLike: Copy + Ord + fmt::Debug {
    /// The integer magnitude of this value.
    fn magnitude(self) -> i128;

    /// A value with the same unit as `self` and the given magnitude,
    /// or `None` if the magnitude does not fit.
    fn with_magnitude(self, magnitude: i128) -> Option<Self>;

    /// The time resolution of this value, if it is a timestamp.
    #[inline]
    fn unit(self) -> Option<TimeUnit> {
        None
    }
}

macro_rules! integer_like_impl {
    ($($T:ty),*) => {
        $(
            impl IntegerLike for $T {
                #[inline]
                fn magnitude(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn with_magnitude(self, magnitude: i128) -> Option<Self> {
                    <$T as NumCast>::from(magnitude)
                }
            }
        )*
    };
}

integer_like_impl!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Fixed resolution of a [`Timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Short code for the unit, as used by datetime64 dtypes.
    pub fn code(&self) -> &'static str {
        match self {
            TimeUnit::Days => "D",
            TimeUnit::Hours => "h",
            TimeUnit::Minutes => "m",
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A count of ticks since the epoch at a fixed resolution.
///
/// Ordering compares ticks; comparing timestamps of different units is
/// meaningless, and tables and queries are checked for a common unit before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    ticks: i64,
    unit: TimeUnit,
}

impl Timestamp {
    pub fn new(ticks: i64, unit: TimeUnit) -> Self {
        Self { ticks, unit }
    }

    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.unit
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.ticks, self.unit)
    }
}

impl IntegerLike for Timestamp {
    #[inline]
    fn magnitude(self) -> i128 {
        self.ticks as i128
    }

    #[inline]
    fn with_magnitude(self, magnitude: i128) -> Option<Self> {
        let ticks = <i64 as NumCast>::from(magnitude)?;
        Some(Self {
            ticks,
            unit: self.unit,
        })
    }

    #[inline]
    fn unit(self) -> Option<TimeUnit> {
        Some(self.unit)
    }
}
