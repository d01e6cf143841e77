// This module contains strategies for:
//  * lattice points
//  * convex polygons on a grid
//  * segments with exactly representable slopes
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Grid, Point, Polygon, Segment};

use proptest::prelude::*;
use rand::SeedableRng;

pub fn any_lattice_point() -> impl Strategy<Value = Point> {
  (-1000..=1000i32, -1000..=1000i32).prop_map(Point::from)
}

// Polygons are grown from a seed rather than shrunk point by point; a failing
// case reports the seed and vertex budget.
pub fn any_convex_polygon(grid: Grid) -> impl Strategy<Value = Polygon> {
  (3usize..12, any::<u64>()).prop_map(move |(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    Polygon::random_convex(&grid, n, rng)
  })
}

// Slopes are limited to 0, ±1 and ∞ so intercepts and intersections are exact.
pub fn any_exact_segment() -> impl Strategy<Value = Segment> {
  let direction = prop_oneof![Just((1, 0)), Just((0, 1)), Just((1, 1)), Just((1, -1))];
  (0..=10i32, 0..=10i32, direction, 1..=5i32).prop_map(|(x, y, (dx, dy), len)| {
    Segment::new(Point::new([x, y]), Point::new([x + dx * len, y + dy * len]))
  })
}
