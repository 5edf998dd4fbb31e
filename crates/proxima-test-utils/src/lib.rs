//! Test utilities for Proxima development.
//!
//! Deterministic, seed-driven point-set generators shared by the
//! integration tests and benchmarks. Same seed, same points — every
//! generator goes through a [`ChaCha8Rng`](rand_chacha::ChaCha8Rng)
//! seeded from the caller's value, never from ambient entropy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{
    collinear_points, distinct_random_points, lattice_points, narrow_band_points, random_points,
    shuffled,
};
