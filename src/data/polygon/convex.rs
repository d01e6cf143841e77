use claims::debug_assert_ok;
use rand::Rng;

use crate::data::{Grid, Point};
use crate::Orientation;

use super::Polygon;

impl Polygon {
  /// Sample a random strictly convex polygon with vertices on `grid`.
  ///
  /// `n` lattice points are drawn uniformly (at least three) and their convex
  /// hull is returned, counter-clockwise and without colinear vertices. If the
  /// sample is degenerate the draw is repeated, so the result may have fewer
  /// than `n` vertices but never fewer than three.
  ///
  /// ```
  /// # use lattice_picks::data::{Grid, Polygon};
  /// # use rand::SeedableRng;
  /// let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
  /// let grid = Grid::default();
  /// let poly = Polygon::random_convex(&grid, 6, &mut rng);
  /// assert!(poly.len() >= 3);
  /// assert!(grid.check(&poly).is_ok());
  /// ```
  pub fn random_convex<R>(grid: &Grid, n: usize, rng: &mut R) -> Polygon
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    loop {
      let pts = (0..n)
        .map(|_| Point::random(0..=grid.size(), rng))
        .collect();
      let hull = convex_hull(pts);
      if hull.len() >= 3 {
        let poly = Polygon::new_unchecked(hull);
        debug_assert_ok!(poly.validate());
        return poly;
      }
    }
  }
}

// Andrew's monotone chain. Colinear points are dropped.
fn convex_hull(mut pts: Vec<Point>) -> Vec<Point> {
  pts.sort_unstable();
  pts.dedup();
  if pts.len() < 3 {
    return pts;
  }
  let mut hull: Vec<Point> = Vec::with_capacity(pts.len() * 2);
  for pass in 0..2 {
    let start = hull.len();
    let chain: Box<dyn Iterator<Item = &Point>> = if pass == 0 {
      Box::new(pts.iter())
    } else {
      Box::new(pts.iter().rev())
    };
    for pt in chain {
      while hull.len() >= start + 2
        && !Orientation::new(&hull[hull.len() - 2], &hull[hull.len() - 1], pt).is_ccw()
      {
        hull.pop();
      }
      hull.push(*pt);
    }
    // The last point of each chain is the first point of the next one.
    hull.pop();
  }
  hull
}
