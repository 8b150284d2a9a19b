//! One-dimensional evaluators over a breakpoint table: exact forward
//! interpolation, interpolating inverse lookup, and inverse lookup that snaps to
//! table entries. All of them share a batch-evaluation trait and the same
//! fill policy for queries outside the table.

pub mod hold;
pub mod linear;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::InterpError;
use crate::locate::{Direction, Locator};
use crate::method::Method;
use crate::table::Breakpoints;
use crate::value::IntegerLike;

/// Result of evaluating one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolved<T> {
    Value(T),
    /// The query fell outside the table and the fill for that side is unset.
    Unset,
    /// An exact inverse lookup found no matching domain value.
    NoMatch,
}

impl<T> Resolved<T> {
    /// The resolved value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Resolved::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// What to produce for a query beyond one end of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Fill<T> {
    /// Hold the value mapped at the nearest endpoint.
    Clamp,
    /// Substitute a fixed value.
    Value(T),
    /// Produce [`Resolved::Unset`].
    Unset,
}

impl<T> Default for Fill<T> {
    fn default() -> Self {
        Fill::Clamp
    }
}

impl<T> Fill<T> {
    /// Resolve against the value mapped at the nearest endpoint.
    #[inline]
    pub fn resolve(self, endpoint: T) -> Resolved<T> {
        match self {
            Fill::Clamp => Resolved::Value(endpoint),
            Fill::Value(v) => Resolved::Value(v),
            Fill::Unset => Resolved::Unset,
        }
    }
}

/// Fill policy on each side of the table.
///
/// `left` applies before the first breakpoint and `right` after the last,
/// in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fills<T> {
    pub left: Fill<T>,
    pub right: Fill<T>,
}

impl<T> Default for Fills<T> {
    fn default() -> Self {
        Self::clamp()
    }
}

impl<T> Fills<T> {
    pub fn new(left: Fill<T>, right: Fill<T>) -> Self {
        Self { left, right }
    }

    /// Hold the endpoint values on both sides.
    pub fn clamp() -> Self {
        Self::new(Fill::Clamp, Fill::Clamp)
    }

    /// Leave out-of-range queries unset on both sides.
    pub fn unset() -> Self {
        Self::new(Fill::Unset, Fill::Unset)
    }

    /// Substitute fixed values on both sides.
    pub fn values(left: T, right: T) -> Self {
        Self::new(Fill::Value(left), Fill::Value(right))
    }
}

impl<T: IntegerLike> Fills<T> {
    /// Check that explicit fill values carry the expected unit.
    fn check_unit(&self, check: impl Fn(T) -> Result<(), InterpError>) -> Result<(), InterpError> {
        for fill in [self.left, self.right] {
            if let Fill::Value(v) = fill {
                check(v)?;
            }
        }
        Ok(())
    }
}

/// A one-dimensional evaluator mapping queries of type `Q` to results of type `R`.
pub trait Interp1D<Q, R>
where
    Q: IntegerLike,
    R: IntegerLike,
{
    /// Evaluate a single query.
    fn eval_one(&self, loc: Q) -> Result<Resolved<R>, InterpError>;

    /// Evaluate a set of queries into a preallocated output.
    ///
    /// A failing query fails the whole batch, and the contents of `out` are
    /// then unspecified.
    #[inline]
    fn eval(&self, locs: &[Q], out: &mut [Resolved<R>]) -> Result<(), InterpError> {
        if locs.len() != out.len() {
            return Err(InterpError::OutputLength {
                expected: locs.len(),
                found: out.len(),
            });
        }

        trace!(n = locs.len(), "evaluating batch");
        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i])?;
        }

        Ok(())
    }

    /// Evaluate a set of queries, allocating for the output.
    #[inline]
    fn eval_alloc(&self, locs: &[Q]) -> Result<Vec<Resolved<R>>, InterpError> {
        let mut out = vec![Resolved::Unset; locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }

    /// Evaluate a set of queries across the rayon thread pool.
    ///
    /// Every query only reads the shared table, so results match [`Interp1D::eval_alloc`].
    #[cfg(feature = "rayon")]
    fn eval_par(&self, locs: &[Q]) -> Result<Vec<Resolved<R>>, InterpError>
    where
        Self: Sync,
        Q: Sync,
        R: Send,
    {
        use rayon::prelude::*;

        trace!(
            n = locs.len(),
            threads = rayon::current_num_threads(),
            "evaluating batch in parallel"
        );
        locs.par_iter().map(|&loc| self.eval_one(loc)).collect()
    }
}

/// End of the table that a query fell past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Resolve an inverse query that falls past one end of the range.
///
/// Exact lookups only honor explicit fills. Fill policies that still have a
/// real answer on that side (forward fill above every range value, backward
/// fill below) return the endpoint's domain value without consulting the fill.
fn resolve_outside<X, F>(
    table: &Breakpoints<'_, X, F>,
    locator: &Locator<'_, F>,
    method: Method,
    fills: &Fills<X>,
    side: Side,
) -> Resolved<X>
where
    X: IntegerLike,
    F: IntegerLike,
{
    let (fill, end) = match side {
        Side::Left => (fills.left, 0),
        Side::Right => (fills.right, table.len() - 1),
    };
    let end = locator.exact(&table.range()[end]).unwrap_or(end);
    let endpoint = table.domain()[end];

    let below_all = matches!(
        (side, locator.direction()),
        (Side::Left, Direction::Ascending) | (Side::Right, Direction::Descending)
    );

    match (method, below_all) {
        (Method::None, _) => match fill {
            Fill::Clamp => Resolved::NoMatch,
            fill => fill.resolve(endpoint),
        },
        (Method::ForwardFill, false) | (Method::BackwardFill, true) => Resolved::Value(endpoint),
        _ => fill.resolve(endpoint),
    }
}

/// Reject exact lookups over a range with repeated values.
fn check_ambiguity<X, F>(table: &Breakpoints<'_, X, F>, method: Method) -> Result<(), InterpError>
where
    X: IntegerLike,
    F: IntegerLike,
{
    match (method, table.range_tie()) {
        (Method::None, Some(first)) => Err(InterpError::AmbiguousTable {
            first,
            second: first + 1,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::{Fill, Fills, Resolved};

    #[test]
    fn test_fill_resolve() {
        assert_eq!(Fill::Clamp.resolve(7), Resolved::Value(7));
        assert_eq!(Fill::Value(-1).resolve(7), Resolved::Value(-1));
        assert_eq!(Fill::<i64>::Unset.resolve(7), Resolved::Unset);
        assert_eq!(Fills::<i64>::default(), Fills::clamp());
        assert_eq!(Fills::values(1, 2).right, Fill::Value(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_fills_serde() {
        use crate::value::{TimeUnit, Timestamp};

        let fills = Fills::new(Fill::Value(Timestamp::new(1, TimeUnit::Seconds)), Fill::Unset);
        let json = serde_json::to_string(&fills).unwrap();
        assert_eq!(
            json,
            r#"{"left":{"value":{"ticks":1,"unit":"seconds"}},"right":"unset"}"#
        );
        let back: Fills<Timestamp> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fills);

        let fill: Fill<i64> = serde_json::from_str(r#""unset""#).unwrap();
        assert_eq!(fill, Fill::Unset);
        let fill: Fill<i64> = serde_json::from_str(r#""clamp""#).unwrap();
        assert_eq!(fill, Fill::Clamp);
    }

    #[test]
    fn test_resolved_value() {
        assert_eq!(Resolved::Value(3).value(), Some(3));
        assert_eq!(Resolved::<i64>::Unset.value(), None);
        assert_eq!(Resolved::<i64>::NoMatch.value(), None);
    }
}
