//! Piecewise-constant inverse lookup that only ever returns table entries.

use super::{check_ambiguity, resolve_outside, Fills, Interp1D, Resolved, Side};
use crate::error::InterpError;
use crate::locate::{Direction, Locator, Location};
use crate::method::Method;
use crate::table::Breakpoints;
use crate::value::IntegerLike;

/// Inverse lookup that snaps each query to a breakpoint.
///
/// Between two range values:
/// * `None`: no match
/// * `Nearest`: the closer breakpoint by output distance; the left one on a tie
/// * `ForwardFill`: the breakpoint with the largest range value not above the query
/// * `BackwardFill`: the breakpoint with the smallest range value not below the query
///
/// Equal range values resolve to the lowest index.
#[derive(Debug, Clone)]
pub struct Snap1D<'a, X, F> {
    table: Breakpoints<'a, X, F>,
    locator: Locator<'a, F>,
    method: Method,
    fills: Fills<X>,
}

impl<'a, X, F> Snap1D<'a, X, F>
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

        Ok(Self {
            table,
            locator,
            method,
            fills: Fills::default(),
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

    /// Pick a breakpoint of the interval `[i, i + 1]` for a query strictly inside it.
    #[inline]
    fn pick(&self, loc: F, i: usize) -> Option<usize> {
        let ys = self.table.range();
        let ascending = self.locator.direction() == Direction::Ascending;

        match self.method {
            Method::None => None,
            Method::Nearest => {
                let d0 = (loc.magnitude() - ys[i].magnitude()).unsigned_abs();
                let d1 = (loc.magnitude() - ys[i + 1].magnitude()).unsigned_abs();
                if d1 >= d0 {
                    Some(i)
                } else {
                    Some(i + 1)
                }
            }
            Method::ForwardFill if ascending => Some(i),
            Method::ForwardFill => Some(i + 1),
            Method::BackwardFill if ascending => Some(i + 1),
            Method::BackwardFill => Some(i),
        }
    }
}

impl<'a, X, F> Interp1D<F, X> for Snap1D<'a, X, F>
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
                let v = self.pick(loc, i).map(|j| {
                    let j = self.locator.exact(&ys[j]).unwrap_or(j);
                    xs[j]
                });
                return Ok(v.map_or(Resolved::NoMatch, Resolved::Value));
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
