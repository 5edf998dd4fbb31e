//! Benchmark profiles for the Proxima closest-pair solver.
//!
//! Fixed seeds and sizes so every bench run sees identical inputs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use proxima::Point;
use proxima_test_utils::{narrow_band_points, random_points};

/// Seed shared by all benchmark inputs.
pub const BENCH_SEED: u64 = 42;

/// Uniform square profile: `n` points in `[-1000, 1000]²`.
pub fn uniform_profile(n: usize) -> Vec<Point> {
    random_points(BENCH_SEED, n, 1_000.0)
}

/// Strip-stress profile: `n` points in a band half a unit wide.
///
/// Nearly every point stays within the best distance of every
/// dividing line, so the strip scan dominates.
pub fn narrow_band_profile(n: usize) -> Vec<Point> {
    narrow_band_points(BENCH_SEED, n, 0.5, 1_000.0)
}
