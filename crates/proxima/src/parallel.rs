//! Fork-join variant of the recursive split.
//!
//! The two halves of each split share no mutable data — each works on
//! a disjoint subslice of the x view and its own y-ordered buffer — so
//! shallow recursion levels can run on separate OS threads and join
//! before the strip scan. Results are identical to [`closest_pair`]:
//! the merge consumes the half results the same way regardless of
//! which thread produced them.
//!
//! [`closest_pair`]: crate::solver::closest_pair

use std::thread;

use crate::brute::brute_force;
use crate::divide::{closest_recursive, merge, split, BRUTE_FORCE_CUTOFF};
use crate::error::PairError;
use crate::pair::ClosestPair;
use crate::point::{cmp_by_x, cmp_by_y, Point};

/// Fork depth cap: at most 2^4 = 16 leaf tasks.
const MAX_FORK_DEPTH: usize = 4;

/// Subproblems below this size are not worth a thread spawn.
const MIN_FORK_LEN: usize = 2048;

/// Find the closest pair among `points`, forking the recursion's
/// shallow levels onto scoped threads.
///
/// Observable results are identical to [`closest_pair`]; only the
/// execution schedule differs. Small inputs never fork and go through
/// the serial recursion directly.
///
/// # Errors
///
/// [`PairError::NotEnoughPoints`] if fewer than two points are
/// supplied.
///
/// [`closest_pair`]: crate::solver::closest_pair
pub fn closest_pair_parallel(points: &[Point]) -> Result<ClosestPair, PairError> {
    if points.len() < 2 {
        return Err(PairError::NotEnoughPoints {
            count: points.len(),
        });
    }

    let mut xs = points.to_vec();
    xs.sort_by(cmp_by_x);
    let mut ys = points.to_vec();
    ys.sort_by(cmp_by_y);

    Ok(closest_forked(&xs, ys, 0))
}

fn closest_forked(xs: &[Point], ys: Vec<Point>, depth: usize) -> ClosestPair {
    if xs.len() <= BRUTE_FORCE_CUTOFF {
        return brute_force(xs);
    }
    if depth >= MAX_FORK_DEPTH || xs.len() < MIN_FORK_LEN {
        return closest_recursive(xs, ys);
    }

    let (mid, boundary, left_ys, right_ys) = split(xs, &ys);
    let (left_xs, right_xs) = xs.split_at(mid);

    let (left, right) = thread::scope(|s| {
        let handle = s.spawn(move || closest_forked(left_xs, left_ys, depth + 1));
        let right = closest_forked(right_xs, right_ys, depth + 1);
        let left = handle.join().expect("closest-pair worker panicked");
        (left, right)
    });

    merge(&ys, &boundary, left, right)
}
