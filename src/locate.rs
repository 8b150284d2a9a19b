//! Bisection search for the interval bracketing a query.
use crate::error::InterpError;

/// Ordering of a monotonic breakpoint sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Direction of a monotonic sequence, judged from its endpoints.
    /// A constant sequence counts as ascending.
    pub fn of<T: Ord>(points: &[T]) -> Self {
        match (points.first(), points.last()) {
            (Some(first), Some(last)) if first > last => Direction::Descending,
            _ => Direction::Ascending,
        }
    }

    /// Whether `a` comes strictly before `b` in this ordering.
    #[inline]
    pub fn precedes<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }
}

/// Position of a query relative to a breakpoint sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Before the first breakpoint.
    Below,
    /// Inside `[points[i], points[i + 1]]`.
    Within(usize),
    /// After the last breakpoint.
    Above,
}

/// Locates queries in a monotonic sequence of breakpoints.
///
/// The direction is fixed when the locator is built, so a batch of queries
/// shares one direction check.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a, T> {
    points: &'a [T],
    direction: Direction,
}

impl<'a, T: Ord> Locator<'a, T> {
    pub fn new(points: &'a [T]) -> Result<Self, InterpError> {
        let direction = Direction::of(points);
        Self::with_direction(points, direction)
    }

    /// Build a locator for a sequence whose direction is already known.
    pub fn with_direction(points: &'a [T], direction: Direction) -> Result<Self, InterpError> {
        if points.len() < 2 {
            return Err(InterpError::EmptyTable(points.len()));
        }

        Ok(Self { points, direction })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of breakpoints that come strictly before `loc`.
    #[inline]
    fn preceding(&self, loc: &T) -> usize {
        self.points
            .partition_point(|v| self.direction.precedes(v, loc))
    }

    /// Find the interval containing `loc`.
    ///
    /// A query equal to a breakpoint lands in the interval where that breakpoint
    /// is the left endpoint, taking the lowest index among equal breakpoints;
    /// the final breakpoint lands in the last interval.
    #[inline]
    pub fn locate(&self, loc: &T) -> Location {
        let n = self.points.len();
        let i = self.preceding(loc);

        if i == n {
            Location::Above
        } else if &self.points[i] == loc {
            Location::Within(i.min(n - 2))
        } else if i == 0 {
            Location::Below
        } else {
            Location::Within(i - 1)
        }
    }

    /// Lowest index whose breakpoint equals `loc`.
    #[inline]
    pub fn exact(&self, loc: &T) -> Option<usize> {
        let i = self.preceding(loc);
        match self.points.get(i) {
            Some(v) if v == loc => Some(i),
            _ => None,
        }
    }
}
