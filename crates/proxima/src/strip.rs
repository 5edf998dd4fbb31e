//! Merge-step scan over the strip around the dividing line.

use crate::pair::ClosestPair;
use crate::point::{cmp_by_y, Point};

/// Scan a strip of points near the dividing line for a pair closer
/// than `d`.
///
/// The strip is sorted by y in place first, so callers may pass it in
/// any order. For each point the scan walks forward only while the
/// y-gap to the candidate stays below the running minimum, computing
/// the full distance under that guard and tightening the minimum on
/// strict improvement (ties keep the first pair found). The y-gap
/// condition is the only cutoff: for points confined to a strip of
/// width `2d`, a packing argument bounds the forward walk at a small
/// constant once the minimum has tightened, so no fixed comparison cap
/// is needed or wanted.
///
/// Returns `None` when no pair in the strip beats `d`; the caller then
/// keeps its prior best.
pub(crate) fn strip_closest(strip: &mut [Point], d: f64) -> Option<ClosestPair> {
    strip.sort_by(cmp_by_y);

    let mut min = d;
    let mut best = None;
    for i in 0..strip.len() {
        for j in (i + 1)..strip.len() {
            if strip[j].y - strip[i].y >= min {
                break;
            }
            let dist = strip[i].distance(&strip[j]);
            if dist < min {
                min = dist;
                best = Some(ClosestPair::new(strip[i], strip[j], dist));
            }
        }
    }
    best
}
