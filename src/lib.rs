//! Exact piecewise-linear interpolation over integer and timestamp breakpoints,
//! forward from domain to range and inverse from range back to domain.
//!
//! All arithmetic is carried out on arbitrary-precision integers and rounded
//! once, half to even, so results are exact for any magnitude that fits the
//! input types: nanosecond timestamps, `u64` counters and `i64` extremes alike.
//!
//! # Methods
//! Tables are located by bisection, so every query costs log2(number of breakpoints).
//!
//! | Evaluator                     | Direction        | Result                                |
//! |-------------------------------|------------------|---------------------------------------|
//! | one_dim::linear::Forward1D    | domain -> range  | rounded interpolation                 |
//! | one_dim::linear::Inverse1D    | range -> domain  | exact preimage resolved by a [Method] |
//! | one_dim::hold::Snap1D         | range -> domain  | nearest table entry by a [Method]     |
//!
//! Queries beyond either end of a table take the [Fills] for that side.
//!
//! # Example: Forward and Inverse
//! ```rust
//! use xinterp::{forward, inverse, Fills, Resolved};
//!
//! let domain = [0_i64, 10, 20];
//! let range = [0_i64, 1000, 2000];
//!
//! let ys = forward(&[-5, 5, 15, 25], &domain, &range, Fills::unset()).unwrap();
//! assert_eq!(
//!     ys,
//!     [Resolved::Unset, Resolved::Value(500), Resolved::Value(1500), Resolved::Unset]
//! );
//!
//! let xs = inverse(&[1, 499, 1001, 1503, 1997], &domain, &range, "nearest", Fills::clamp()).unwrap();
//! let xs: Vec<i64> = xs.into_iter().filter_map(Resolved::value).collect();
//! assert_eq!(xs, [0, 5, 10, 15, 20]);
//! ```
//!
//! # Example: Timestamps
//! ```rust
//! use xinterp::one_dim::{linear::Forward1D, Interp1D, Resolved};
//! use xinterp::{Breakpoints, TimeUnit, Timestamp};
//!
//! let ns = |v| Timestamp::new(v, TimeUnit::Nanoseconds);
//! let domain = [0_u64, 3];
//! let range = [ns(1_700_000_000_000_000_000), ns(1_700_000_000_000_001_000)];
//!
//! let table = Breakpoints::new(&domain, &range).unwrap();
//! let f = Forward1D::new(table).unwrap();
//! assert_eq!(f.eval_one(1).unwrap(), Resolved::Value(ns(1_700_000_000_000_000_333)));
//! ```
#![allow(clippy::needless_range_loop)]

pub mod error;
pub use error::{Axis, InterpError};

pub mod value;
pub use value::{IntegerLike, TimeUnit, Timestamp};

pub mod exact;
pub use exact::Rounding;

pub mod locate;
pub use locate::{Direction, Location, Locator};

pub mod table;
pub use table::Breakpoints;

pub mod method;
pub use method::Method;

pub mod one_dim;
pub use one_dim::{
    hold::Snap1D, linear::Forward1D, linear::Inverse1D, Fill, Fills, Interp1D, Resolved,
};

pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

/// Interpolate `queries` from `domain` onto `range`.
///
/// # Errors
/// * Any table validation error from [`Breakpoints::new`]
/// * `UnitMismatch` if a query or fill value is in a different time unit
/// * `Unrepresentable` if a result does not fit the range type
pub fn forward<X, F>(
    queries: &[X],
    domain: &[X],
    range: &[F],
    fills: Fills<F>,
) -> Result<Vec<Resolved<F>>, InterpError>
where
    X: IntegerLike,
    F: IntegerLike,
{
    let table = Breakpoints::new(domain, range)?;
    Forward1D::new(table)?
        .with_fills(fills)?
        .eval_alloc(queries)
}

/// Find the domain values whose images are `queries`, interpolating between
/// breakpoints and resolving inexact preimages by `method`
/// (one of `none`, `nearest`, `ffill`, `bfill`).
///
/// # Errors
/// * `InvalidMethod` for an unknown method name
/// * Any table validation error from [`Breakpoints::new`] or [`Inverse1D::new`]
/// * `UnitMismatch` if a query or fill value is in a different time unit
pub fn inverse<X, F>(
    queries: &[F],
    domain: &[X],
    range: &[F],
    method: &str,
    fills: Fills<X>,
) -> Result<Vec<Resolved<X>>, InterpError>
where
    X: IntegerLike,
    F: IntegerLike,
{
    let method: Method = method.parse()?;
    let table = Breakpoints::new(domain, range)?;
    Inverse1D::new(table, method)?
        .with_fills(fills)?
        .eval_alloc(queries)
}

/// Like [`inverse`], but only ever returns entries of `domain`.
///
/// # Errors
/// As for [`inverse`].
pub fn snap<X, F>(
    queries: &[F],
    domain: &[X],
    range: &[F],
    method: &str,
    fills: Fills<X>,
) -> Result<Vec<Resolved<X>>, InterpError>
where
    X: IntegerLike,
    F: IntegerLike,
{
    let method: Method = method.parse()?;
    let table = Breakpoints::new(domain, range)?;
    Snap1D::new(table, method)?
        .with_fills(fills)?
        .eval_alloc(queries)
}
