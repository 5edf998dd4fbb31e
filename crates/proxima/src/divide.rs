//! Recursive divide-and-conquer over paired x-sorted and y-sorted views.
//!
//! The x view is never copied: recursion descends through index-range
//! subslices of the one backing array. The y view is dealt into
//! y-ordered halves with a single linear pass per level, which together
//! with the linear strip filter is the O(n) merge work that keeps the
//! whole recursion at O(n log n).

use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::brute::brute_force;
use crate::pair::ClosestPair;
use crate::point::{cmp_by_x, Point};
use crate::strip::strip_closest;

/// Subsets this small go straight to [`brute_force`].
pub(crate) const BRUTE_FORCE_CUTOFF: usize = 3;

/// Inline capacity of the per-level strip buffer. Once the best
/// distance has tightened, strips are usually tiny; larger strips
/// spill to the heap.
const STRIP_INLINE: usize = 16;

/// Closest pair of the point set held by `xs` (sorted by [`cmp_by_x`])
/// and `ys` (the same multiset, sorted by y).
pub(crate) fn closest_recursive(xs: &[Point], ys: Vec<Point>) -> ClosestPair {
    debug_assert_eq!(xs.len(), ys.len());

    if xs.len() <= BRUTE_FORCE_CUTOFF {
        return brute_force(xs);
    }

    let (mid, boundary, left_ys, right_ys) = split(xs, &ys);

    let left = closest_recursive(&xs[..mid], left_ys);
    let right = closest_recursive(&xs[mid..], right_ys);

    merge(&ys, &boundary, left, right)
}

/// Split the views at the index midpoint of `xs`.
///
/// Returns the midpoint, the boundary element `xs[mid]`, and the
/// y-ordered halves of `ys`. The halves carry exactly the multisets of
/// `xs[..mid]` and `xs[mid..]`: membership is decided by three-way
/// `(x, y)` comparison against the boundary element, and points
/// comparing equal to it — necessarily coordinate-identical, hence
/// interchangeable — are dealt to the left until the left half is
/// full. A plain `x <= boundary.x` filter would over- or under-fill a
/// side whenever several points share the boundary x-coordinate.
pub(crate) fn split(xs: &[Point], ys: &[Point]) -> (usize, Point, Vec<Point>, Vec<Point>) {
    let mid = xs.len() / 2;
    let boundary = xs[mid];

    // xs is sorted by cmp_by_x, so this counts the points strictly
    // below the boundary; the remainder of the left half is made up of
    // boundary-equal points.
    let less = xs.partition_point(|p| cmp_by_x(p, &boundary) == Ordering::Less);
    let mut equal_left = mid - less;

    let mut left = Vec::with_capacity(mid);
    let mut right = Vec::with_capacity(ys.len() - mid);
    for p in ys {
        match cmp_by_x(p, &boundary) {
            Ordering::Less => left.push(*p),
            Ordering::Greater => right.push(*p),
            Ordering::Equal => {
                if equal_left > 0 {
                    equal_left -= 1;
                    left.push(*p);
                } else {
                    right.push(*p);
                }
            }
        }
    }
    debug_assert_eq!(left.len(), mid);

    (mid, boundary, left, right)
}

/// Combine the two half results: keep the closer one, then let the
/// strip scan look for a pair straddling the dividing line.
///
/// On an exact distance tie the right half's pair is kept (`<`, not
/// `<=`). The strip collects y-view points within the current best
/// distance of the boundary, strictly.
pub(crate) fn merge(
    ys: &[Point],
    boundary: &Point,
    left: ClosestPair,
    right: ClosestPair,
) -> ClosestPair {
    let best = if left.distance < right.distance {
        left
    } else {
        right
    };

    let mut strip: SmallVec<[Point; STRIP_INLINE]> = ys
        .iter()
        .filter(|p| (p.x - boundary.x).abs() < best.distance)
        .copied()
        .collect();

    match strip_closest(&mut strip, best.distance) {
        Some(improved) => improved,
        None => best,
    }
}
