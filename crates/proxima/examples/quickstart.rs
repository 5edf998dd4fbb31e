//! Proxima quickstart — find and report the closest pair in a small
//! sample set.
//!
//! Run with:
//!   cargo run --example quickstart

use proxima::{closest_pair, Point};

// Sample point set. The closest pair is (2,3)-(3,4) at distance √2.
const SAMPLE: [Point; 6] = [
    Point::new(2.0, 3.0),
    Point::new(12.0, 30.0),
    Point::new(40.0, 50.0),
    Point::new(5.0, 1.0),
    Point::new(12.0, 10.0),
    Point::new(3.0, 4.0),
];

fn main() {
    let pair = closest_pair(&SAMPLE).expect("sample has at least two points");

    println!("points:");
    for p in &SAMPLE {
        println!("  ({}, {})", p.x, p.y);
    }
    println!(
        "closest pair: ({}, {}) and ({}, {}), distance {:.8}",
        pair.a.x, pair.a.y, pair.b.x, pair.b.y, pair.distance
    );
}
