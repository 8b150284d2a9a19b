//! Exact evaluation of the linear interpolation formula.
//!
//! Breakpoints are widened to arbitrary-precision integers, so the result is
//! the rounded value of the infinitely precise quotient regardless of magnitude.
//! Floating-point division never enters the evaluation; spans of nanosecond
//! timestamps exceed the 53-bit mantissa of an `f64` and would round silently.
use core::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::InterpError;
use crate::value::IntegerLike;

/// How to resolve a rational quotient to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Only integral quotients produce a result.
    Exact,
    /// Round to the nearest integer, ties to the even neighbor.
    HalfEven,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
}

/// Divide `num` by a nonzero `den` under the given rounding rule.
///
/// Returns `None` only for [`Rounding::Exact`] when the division leaves a remainder.
pub fn divide(num: BigInt, den: BigInt, rounding: Rounding) -> Option<BigInt> {
    // Floor division below relies on a positive divisor
    let (num, den) = if den.is_negative() {
        (-num, -den)
    } else {
        (num, den)
    };
    let (quot, rem) = num.div_mod_floor(&den);

    match rounding {
        Rounding::Exact => rem.is_zero().then_some(quot),
        Rounding::Floor => Some(quot),
        Rounding::Ceil if rem.is_zero() => Some(quot),
        Rounding::Ceil => Some(quot + BigInt::one()),
        Rounding::HalfEven => match (rem * 2u8).cmp(&den) {
            Ordering::Less => Some(quot),
            Ordering::Greater => Some(quot + BigInt::one()),
            Ordering::Equal if quot.is_even() => Some(quot),
            Ordering::Equal => Some(quot + BigInt::one()),
        },
    }
}

/// Evaluate `y0 + (x - x0) * (y1 - y0) / (x1 - x0)` exactly, then round.
///
/// The whole quotient `(y0 * (x1 - x0) + (x - x0) * (y1 - y0)) / (x1 - x0)` is
/// rounded at once; rounding only the offset from `y0` would pick the wrong
/// neighbor on ties whenever `y0` is odd.
///
/// Queries equal to an endpoint return that endpoint's value without dividing.
/// `Ok(None)` means the quotient was not integral under [`Rounding::Exact`].
///
/// # Errors
/// * `DegenerateInterval` if `x0 == x1`
/// * `Unrepresentable` if the rounded result does not fit an `i128`, which can
///   only happen when `x` lies far outside `[x0, x1]`
pub fn lerp(
    x0: i128,
    x1: i128,
    y0: i128,
    y1: i128,
    x: i128,
    rounding: Rounding,
) -> Result<Option<i128>, InterpError> {
    if x0 == x1 {
        return Err(InterpError::DegenerateInterval(x0));
    }
    if x == x0 {
        return Ok(Some(y0));
    }
    if x == x1 {
        return Ok(Some(y1));
    }

    let span = BigInt::from(x1) - BigInt::from(x0);
    let rise = BigInt::from(y1) - BigInt::from(y0);
    let num = BigInt::from(y0) * &span + (BigInt::from(x) - BigInt::from(x0)) * rise;

    divide(num, span, rounding)
        .map(|v| v.to_i128().ok_or(InterpError::Unrepresentable))
        .transpose()
}

/// Typed wrapper over [`lerp`] for integer-like breakpoints.
///
/// The result carries the unit of `y0`.
#[inline]
pub fn interpolate<X, F>(
    x0: X,
    x1: X,
    y0: F,
    y1: F,
    x: X,
    rounding: Rounding,
) -> Result<Option<F>, InterpError>
where
    X: IntegerLike,
    F: IntegerLike,
{
    let v = lerp(
        x0.magnitude(),
        x1.magnitude(),
        y0.magnitude(),
        y1.magnitude(),
        x.magnitude(),
        rounding,
    )?;

    v.map(|m| y0.with_magnitude(m).ok_or(InterpError::Unrepresentable))
        .transpose()
}
