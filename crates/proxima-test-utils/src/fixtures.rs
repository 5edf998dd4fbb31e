//! Seeded point-set generators.

use indexmap::IndexSet;
use proxima::Point;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `n` points uniform in the square `[-range, range]²`.
///
/// Duplicates are possible in principle but vanishingly unlikely;
/// use [`lattice_points`] when duplicates should actually occur.
pub fn random_points(seed: u64, n: usize, range: f64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(-range..=range),
                rng.random_range(-range..=range),
            )
        })
        .collect()
}

/// `n` pairwise-distinct points uniform in `[-range, range]²`.
///
/// Candidates are drawn until `n` unique coordinate pairs have been
/// seen; uniqueness is tracked bit-exactly in insertion order.
pub fn distinct_random_points(seed: u64, n: usize, range: f64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seen: IndexSet<(u64, u64)> = IndexSet::with_capacity(n);
    while seen.len() < n {
        let x: f64 = rng.random_range(-range..=range);
        let y: f64 = rng.random_range(-range..=range);
        seen.insert((x.to_bits(), y.to_bits()));
    }
    seen.iter()
        .map(|&(x, y)| Point::new(f64::from_bits(x), f64::from_bits(y)))
        .collect()
}

/// `n` points snapped to the integer lattice `[0, cells)²`.
///
/// With `n` on the order of `cells²` or above this produces plenty of
/// exact duplicates and exact distance ties, exercising the zero
/// distance and tie-break paths.
pub fn lattice_points(seed: u64, n: usize, cells: u32) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(0..cells) as f64,
                rng.random_range(0..cells) as f64,
            )
        })
        .collect()
}

/// `n` points in a tall thin band: x in `[0, width]`, y in
/// `[-height, height]`.
///
/// Nearly every point lands within the best distance of every
/// dividing line, stressing the strip scan.
pub fn narrow_band_points(seed: u64, n: usize, width: f64, height: f64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(0.0..=width),
                rng.random_range(-height..=height),
            )
        })
        .collect()
}

/// `n` collinear points on the x-axis, `spacing` apart.
pub fn collinear_points(n: usize, spacing: f64) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64 * spacing, 0.0)).collect()
}

/// A copy of `points` in a seed-determined shuffled order.
pub fn shuffled(points: &[Point], seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = points.to_vec();
    out.shuffle(&mut rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_points_deterministic() {
        assert_eq!(random_points(42, 100, 50.0), random_points(42, 100, 50.0));
    }

    #[test]
    fn random_points_in_range() {
        for p in random_points(1, 500, 10.0) {
            assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0);
        }
    }

    #[test]
    fn distinct_random_points_are_distinct() {
        let points = distinct_random_points(3, 200, 100.0);
        assert_eq!(points.len(), 200);
        let unique: IndexSet<(u64, u64)> = points
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        assert_eq!(unique.len(), 200);
    }

    #[test]
    fn lattice_points_contain_duplicates() {
        // 1000 draws from a 10x10 lattice must collide.
        let points = lattice_points(7, 1000, 10);
        let unique: IndexSet<(u64, u64)> = points
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        assert!(unique.len() < points.len());
    }

    #[test]
    fn collinear_points_spacing() {
        let points = collinear_points(5, 2.5);
        assert_eq!(points[4], Point::new(10.0, 0.0));
        for w in points.windows(2) {
            assert_eq!(w[1].x - w[0].x, 2.5);
            assert_eq!(w[1].y, 0.0);
        }
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let points = collinear_points(20, 1.0);
        let perm = shuffled(&points, 9);
        assert_ne!(perm, points);
        let mut a: Vec<u64> = points.iter().map(|p| p.x.to_bits()).collect();
        let mut b: Vec<u64> = perm.iter().map(|p| p.x.to_bits()).collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}
