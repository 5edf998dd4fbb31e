//! The validated entry point: sort both views once, then recurse.

use crate::divide::closest_recursive;
use crate::error::PairError;
use crate::pair::ClosestPair;
use crate::point::{cmp_by_x, cmp_by_y, Point};

/// Find the closest pair among `points`.
///
/// The input is copied and sorted twice — once by x with a y tiebreak,
/// once by y (stable, so equal-y points keep their input order) — then
/// handed to the recursive split. O(n log n) for n points.
///
/// Duplicates are legal input: coincident points yield a distance of
/// exactly `0.0`.
///
/// # Errors
///
/// [`PairError::NotEnoughPoints`] if fewer than two points are
/// supplied; the query is undefined below that and no recursion runs.
///
/// # Examples
///
/// ```
/// use proxima::{closest_pair, Point};
///
/// let points = [
///     Point::new(2.0, 3.0),
///     Point::new(12.0, 30.0),
///     Point::new(40.0, 50.0),
///     Point::new(5.0, 1.0),
///     Point::new(12.0, 10.0),
///     Point::new(3.0, 4.0),
/// ];
/// let pair = closest_pair(&points).unwrap();
/// assert_eq!(pair.a, Point::new(2.0, 3.0));
/// assert_eq!(pair.b, Point::new(3.0, 4.0));
/// assert!((pair.distance - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn closest_pair(points: &[Point]) -> Result<ClosestPair, PairError> {
    if points.len() < 2 {
        return Err(PairError::NotEnoughPoints {
            count: points.len(),
        });
    }

    let mut xs = points.to_vec();
    xs.sort_by(cmp_by_x);
    let mut ys = points.to_vec();
    ys.sort_by(cmp_by_y);

    Ok(closest_recursive(&xs, ys))
}
