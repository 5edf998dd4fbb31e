//! Result-invariant checks shared across the unit test modules.
//!
//! Every solver path must satisfy the same contract: the reported
//! endpoints come from the input, the reported distance is exactly the
//! distance between them, and no input pair is strictly closer. These
//! assertions verify that contract against the exhaustive scan.

use crate::pair::ClosestPair;
use crate::point::Point;

/// Bit-level key: distinguishes -0.0 from 0.0 and tolerates no
/// epsilon, which is what "came from the input" means here.
fn key(p: &Point) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

/// Assert that `pair` is a correct closest-pair result for `points`.
pub fn assert_valid_result(points: &[Point], pair: &ClosestPair) {
    assert!(
        points.iter().any(|p| key(p) == key(&pair.a)),
        "endpoint {:?} not in the input",
        pair.a
    );
    assert!(
        points.iter().any(|p| key(p) == key(&pair.b)),
        "endpoint {:?} not in the input",
        pair.b
    );
    assert_eq!(
        pair.distance,
        pair.a.distance(&pair.b),
        "reported distance does not match the endpoints"
    );
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = points[i].distance(&points[j]);
            assert!(
                d >= pair.distance,
                "pair {:?}-{:?} at {} beats the reported {}",
                points[i],
                points[j],
                d,
                pair.distance
            );
        }
    }
}

/// Assert that two point sequences hold the same multiset of points.
pub fn assert_same_multiset(a: &[Point], b: &[Point]) {
    let mut ka: Vec<_> = a.iter().map(key).collect();
    let mut kb: Vec<_> = b.iter().map(key).collect();
    ka.sort_unstable();
    kb.sort_unstable();
    assert_eq!(ka, kb, "point multisets differ");
}
