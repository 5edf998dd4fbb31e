//! Planar closest-pair search.
//!
//! Finds the minimum-distance pair among a finite set of points in the
//! plane using the classical divide-and-conquer scheme: split the
//! x-sorted points at the index midpoint, solve each half, then scan a
//! strip of points near the dividing line for a pair straddling it.
//! O(n log n) overall, versus the O(n²) exhaustive scan that
//! [`brute_force`] provides as base case and reference oracle.
//!
//! # Quick start
//!
//! ```
//! use proxima::{closest_pair, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(3.0, 4.0),
//!     Point::new(1.0, 1.0),
//! ];
//! let pair = closest_pair(&points).unwrap();
//! assert!((pair.distance - 2.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! # Entry points
//!
//! - [`closest_pair`]: single-threaded recursion.
//! - [`closest_pair_parallel`]: same results, shallow recursion levels
//!   forked onto scoped threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod brute;
pub mod error;
pub mod pair;
pub mod parallel;
pub mod point;
pub mod solver;

mod divide;
mod strip;

#[cfg(test)]
pub(crate) mod checks;

pub use brute::brute_force;
pub use error::PairError;
pub use pair::ClosestPair;
pub use parallel::closest_pair_parallel;
pub use point::{cmp_by_x, cmp_by_y, Point};
pub use solver::closest_pair;
