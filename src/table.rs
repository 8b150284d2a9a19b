//! Validated breakpoint tables.
use std::collections::VecDeque;

use itertools::Itertools;
use tracing::debug;

use crate::error::{Axis, InterpError};
use crate::exact::{interpolate, Rounding};
use crate::locate::{Direction, Locator};
use crate::value::{IntegerLike, TimeUnit};

/// A piecewise-linear function given by parallel `domain` and `range` breakpoints.
///
/// The domain must be strictly monotonic, ascending or descending. The range only
/// needs to be monotonic for inverse lookups; forward interpolation accepts any
/// range. Ties in the range are allowed but make exact inverse lookup ambiguous,
/// and every other inverse policy resolves them to the lowest index.
#[derive(Debug, Clone)]
pub struct Breakpoints<'a, X, F> {
    domain: &'a [X],
    range: &'a [F],
    domain_direction: Direction,
    range_order: Result<Direction, InterpError>,
    range_tie: Option<usize>,
    domain_unit: Option<TimeUnit>,
    range_unit: Option<TimeUnit>,
}

impl<'a, X, F> Breakpoints<'a, X, F>
where
    X: IntegerLike,
    F: IntegerLike,
{
    /// Validate a table.
    ///
    /// # Errors
    /// * `LengthMismatch` if `domain` and `range` differ in length
    /// * `EmptyTable` if there are fewer than two breakpoints
    /// * `UnitMismatch` if either side mixes time units
    /// * `DegenerateInterval` if two neighbouring domain values are equal
    /// * `NotMonotonic` if the domain changes direction
    pub fn new(domain: &'a [X], range: &'a [F]) -> Result<Self, InterpError> {
        if domain.len() != range.len() {
            return Err(InterpError::LengthMismatch {
                domain: domain.len(),
                range: range.len(),
            });
        }
        if domain.len() < 2 {
            return Err(InterpError::EmptyTable(domain.len()));
        }

        let domain_unit = common_unit(domain)?;
        let range_unit = common_unit(range)?;

        let domain_direction = Direction::of(domain);
        for (i, (a, b)) in domain.iter().tuple_windows().enumerate() {
            if a == b {
                return Err(InterpError::DegenerateInterval(a.magnitude()));
            }
            if !domain_direction.precedes(a, b) {
                return Err(InterpError::NotMonotonic {
                    axis: Axis::Domain,
                    index: i + 1,
                });
            }
        }

        let range_order = monotonic_direction(range);
        let range_tie = range.iter().tuple_windows().position(|(a, b)| a == b);

        debug!(
            len = domain.len(),
            domain_direction = ?domain_direction,
            range_direction = ?range_order.as_ref().ok(),
            range_tie = ?range_tie,
            "validated breakpoint table"
        );

        Ok(Self {
            domain,
            range,
            domain_direction,
            range_order,
            range_tie,
            domain_unit,
            range_unit,
        })
    }

    pub fn domain(&self) -> &'a [X] {
        self.domain
    }

    pub fn range(&self) -> &'a [F] {
        self.range
    }

    /// Number of breakpoints
    pub(crate) fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn domain_direction(&self) -> Direction {
        self.domain_direction
    }

    /// Direction of the range.
    ///
    /// # Errors
    /// * `NotMonotonic` if the range changes direction
    pub fn range_direction(&self) -> Result<Direction, InterpError> {
        self.range_order.clone()
    }

    /// Index of the first of two neighbouring, equal range values, if any.
    pub fn range_tie(&self) -> Option<usize> {
        self.range_tie
    }

    pub fn domain_locator(&self) -> Result<Locator<'a, X>, InterpError> {
        Locator::with_direction(self.domain, self.domain_direction)
    }

    /// # Errors
    /// * `NotMonotonic` if the range changes direction
    pub fn range_locator(&self) -> Result<Locator<'a, F>, InterpError> {
        Locator::with_direction(self.range, self.range_direction()?)
    }

    /// Check that a domain value shares the domain's unit.
    #[inline]
    pub fn check_domain_unit(&self, v: X) -> Result<(), InterpError> {
        check_unit(self.domain_unit, v.unit())
    }

    /// Check that a range value shares the range's unit.
    #[inline]
    pub fn check_range_unit(&self, v: F) -> Result<(), InterpError> {
        check_unit(self.range_unit, v.unit())
    }

    /// Drop breakpoints that the remaining ones reproduce to within `tolerance`.
    ///
    /// Ramer-Douglas-Peucker over the table: both endpoints are kept, and a
    /// breakpoint survives when its range value is further than `tolerance` from
    /// the exact interpolation along the chord of the surviving neighbours.
    pub fn simplify(&self, tolerance: u128) -> Result<(Vec<X>, Vec<F>), InterpError> {
        let n = self.len();
        let mut keep = vec![false; n];
        keep[0] = true;
        keep[n - 1] = true;

        let mut stack = VecDeque::new();
        stack.push_back((0, n - 1));

        while let Some((start, end)) = stack.pop_back() {
            let (x0, x1) = (self.domain[start], self.domain[end]);
            let (y0, y1) = (self.range[start], self.range[end]);

            let mut max_dist = 0;
            let mut index = start;
            for i in start + 1..end {
                let y = interpolate(x0, x1, y0, y1, self.domain[i], Rounding::HalfEven)?
                    .ok_or(InterpError::Unrepresentable)?;
                let dist = (y.magnitude() - self.range[i].magnitude()).unsigned_abs();
                if dist > max_dist {
                    max_dist = dist;
                    index = i;
                }
            }

            if max_dist > tolerance {
                keep[index] = true;
                stack.push_back((start, index));
                stack.push_back((index, end));
            }
        }

        let (domain, range): (Vec<X>, Vec<F>) = (0..n)
            .filter(|&i| keep[i])
            .map(|i| (self.domain[i], self.range[i]))
            .unzip();

        debug!(
            tolerance = %tolerance,
            before = n,
            after = domain.len(),
            "simplified breakpoint table"
        );

        Ok((domain, range))
    }
}

/// The unit shared by all values, if any.
fn common_unit<T: IntegerLike>(values: &[T]) -> Result<Option<TimeUnit>, InterpError> {
    let expected = values.first().and_then(|v| v.unit());
    match values.iter().find(|v| v.unit() != expected) {
        Some(v) => Err(InterpError::UnitMismatch {
            expected,
            found: v.unit(),
        }),
        None => Ok(expected),
    }
}

#[inline]
fn check_unit(expected: Option<TimeUnit>, found: Option<TimeUnit>) -> Result<(), InterpError> {
    if expected == found {
        Ok(())
    } else {
        Err(InterpError::UnitMismatch { expected, found })
    }
}

/// Direction of a sequence that may hold ties but must not turn around.
fn monotonic_direction<T: Ord>(values: &[T]) -> Result<Direction, InterpError> {
    let direction = Direction::of(values);
    let turn = values
        .iter()
        .tuple_windows()
        .position(|(a, b)| a != b && !direction.precedes(a, b));

    match turn {
        Some(i) => Err(InterpError::NotMonotonic {
            axis: Axis::Range,
            index: i + 1,
        }),
        None => Ok(direction),
    }
}
