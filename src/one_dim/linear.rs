//! Exact piecewise-linear interpolation, forward and inverse.

use super::{check_ambiguity, resolve_outside, Fills, Interp1D, Resolved, Side};
use crate::error::InterpError;
use crate::exact::{interpolate, Rounding};
use crate::locate::{Locator, Location};
use crate::method::Method;
use crate::table::Breakpoints;
use crate::value::IntegerLike;

/// Forward interpolation from domain to range, rounding half to even.
///
/// Queries outside the domain take the fill for that side; the default holds
/// the first or last range value.
#[derive(Debug, Clone)]
pub struct Forward1D<'a, X, F> {
    table: Breakpoints<'a, X, F>,
    locator: Locator<'a, X>,
    fills: Fills<F>,
}

impl<'a, X, F> Forward1D<'a, X, F>
where
    X: IntegerLike,
    F: IntegerLike,
{
    pub fn new(table: Breakpoints<'a, X, F>) -> Result<Self, InterpError> {
        let locator = table.domain_locator()?;
        Ok(Self {
            table,
            locator,
            fills: Fills::default(),
        })
    }

    /// Set the out-of-range policy.
    ///
    /// # Errors
    /// * `UnitMismatch` if a fill value's unit differs from the range's
    pub fn with_fills(mut self, fills: Fills<F>) -> Result<Self, InterpError> {
        fills.check_unit(|v| self.table.check_range_unit(v))?;
        self.fills = fills;
        Ok(self)
    }
}

impl<'a, X, F> Interp1D<X, F> for Forward1D<'a, X, F>
where
    X: IntegerLike,
    F: IntegerLike,
{
    #[inline]
    fn eval_one(&self, loc: X) -> Result<Resolved<F>, InterpError> {
        self.table.check_domain_unit(loc)?;
        let (xs, ys) = (self.table.domain(), self.table.range());

        match self.locator.locate(&loc) {
            Location::Below => Ok(self.fills.left.resolve(ys[0])),
            Location::Above => Ok(self.fills.right.resolve(ys[ys.len() - 1])),
            Location::Within(i) => {
                interpolate(xs[i], xs[i + 1], ys[i], ys[i + 1], loc, Rounding::HalfEven)?
                    .map(Resolved::Value)
                    .ok_or(InterpError::Unrepresentable)
            }
        }
    }
}

/// Inverse interpolation from range back to domain.
///
/// A query equal to a range value returns the domain value at the lowest
/// matching index. Otherwise the exact preimage over the bracketing interval is
/// resolved to a domain value by the match policy:
/// * `None`: the preimage must be integral, else `NoMatch`
/// * `Nearest`: rounded half to even
/// * `ForwardFill`: the domain value whose image is the largest one not above the query
/// * `BackwardFill`: the domain value whose image is the smallest one not below the query
#[derive(Debug, Clone)]
pub struct Inverse1D<'a, X, F> {
    table: Breakpoints<'a, X, F>,
    locator: Locator<'a, F>,
    method: Method,
    fills: Fills<X>,
    /// Whether domain and range run the same way, so images grow with the domain
    increasing: bool,
}

impl<'a, X, F> Inverse1D<'a, X, F>
where
    X: IntegerLike,
    F: IntegerLike,
{
    /// # Errors
    /// * `NotMonotonic` if the range changes direction
    /// * `AmbiguousTable` for `Method::None` over a range with repeated values
    pub fn new(table: Breakpoints<'a, X, F>, method: Method) -> Result<Self, InterpError> {
        let locator = table.range_locator()?;
        check_ambiguity(&table, method)?;
        let increasing = table.domain_direction() == locator.direction();

        Ok(Self {
            table,
            locator,
            method,
            fills: Fills::default(),
            increasing,
        })
    }

    /// Set the out-of-range policy.
    ///
    /// # Errors
    /// * `UnitMismatch` if a fill value's unit differs from the domain's
    pub fn with_fills(mut self, fills: Fills<X>) -> Result<Self, InterpError> {
        fills.check_unit(|v| self.table.check_domain_unit(v))?;
        self.fills = fills;
        Ok(self)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    #[inline]
    fn rounding(&self) -> Rounding {
        match (self.method, self.increasing) {
            (Method::None, _) => Rounding::Exact,
            (Method::Nearest, _) => Rounding::HalfEven,
            (Method::ForwardFill, true) | (Method::BackwardFill, false) => Rounding::Floor,
            (Method::ForwardFill, false) | (Method::BackwardFill, true) => Rounding::Ceil,
        }
    }
}

impl<'a, X, F> Interp1D<F, X> for Inverse1D<'a, X, F>
where
    X: IntegerLike,
    F: IntegerLike,
{
    #[inline]
    fn eval_one(&self, loc: F) -> Result<Resolved<X>, InterpError> {
        self.table.check_range_unit(loc)?;
        let (xs, ys) = (self.table.domain(), self.table.range());

        if let Some(i) = self.locator.exact(&loc) {
            return Ok(Resolved::Value(xs[i]));
        }

        let side = match self.locator.locate(&loc) {
            Location::Within(i) => {
                // Not on a breakpoint, so ys[i] != ys[i + 1]
                let x = interpolate(ys[i], ys[i + 1], xs[i], xs[i + 1], loc, self.rounding())?;
                return Ok(x.map_or(Resolved::NoMatch, Resolved::Value));
            }
            Location::Below => Side::Left,
            Location::Above => Side::Right,
        };

        Ok(resolve_outside(
            &self.table,
            &self.locator,
            self.method,
            &self.fills,
            side,
        ))
    }
}
