//! Convenience methods for constructing breakpoint tables.
use crate::error::InterpError;
use crate::exact::{interpolate, Rounding};
use crate::value::IntegerLike;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// Interior values are rounded half to even and carry the unit of `start`.
///
/// # Errors
/// * `EmptyTable` if `n < 2`
/// * `UnitMismatch` if `start` and `stop` carry different units
pub fn linspace<T>(start: T, stop: T, n: usize) -> Result<Vec<T>, InterpError>
where
    T: IntegerLike,
{
    if n < 2 {
        return Err(InterpError::EmptyTable(n));
    }
    if start.unit() != stop.unit() {
        return Err(InterpError::UnitMismatch {
            expected: start.unit(),
            found: stop.unit(),
        });
    }

    (0..n)
        .map(|i| {
            interpolate(0, n - 1, start, stop, i, Rounding::HalfEven)?
                .ok_or(InterpError::Unrepresentable)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::linspace;
    use crate::error::InterpError;
    use crate::value::{TimeUnit, Timestamp};

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0i64, 100, 5).unwrap(), vec![0, 25, 50, 75, 100]);
        assert_eq!(linspace(10u8, 0, 3).unwrap(), vec![10, 5, 0]);
        // 2.5 and 7.5 round to even
        assert_eq!(linspace(0i32, 10, 5).unwrap(), vec![0, 2, 5, 8, 10]);
        assert_eq!(
            linspace(i64::MIN, i64::MAX, 3).unwrap(),
            vec![i64::MIN, 0, i64::MAX]
        );
        assert_eq!(linspace(0i64, 1, 1), Err(InterpError::EmptyTable(1)));
    }

    #[test]
    fn test_linspace_timestamps() {
        let us = |v| Timestamp::new(v, TimeUnit::Microseconds);
        let out = linspace(us(1_000), us(2_000), 3).unwrap();
        assert_eq!(out, vec![us(1_000), us(1_500), us(2_000)]);

        let s = Timestamp::new(2, TimeUnit::Seconds);
        assert!(matches!(
            linspace(us(0), s, 2),
            Err(InterpError::UnitMismatch { .. })
        ));
    }
}
