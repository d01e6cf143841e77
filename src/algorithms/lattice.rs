use crate::data::{Classification, Grid, LatticeMap, LatticeMask, Point, Polygon};

/// Non-vertex lattice points on or inside a polygon, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatticePoints {
  pub interior: Vec<Point>,
  pub boundary: Vec<Point>,
}

impl LatticePoints {
  /// Every enclosed point: interior, then boundary, then the polygon's
  /// vertices.
  pub fn mask(&self, grid: &Grid, polygon: &Polygon) -> LatticeMask {
    let mut mask = LatticeMask::new(*grid);
    mask.extend(&self.interior);
    mask.extend(&self.boundary);
    mask.extend(polygon.iter());
    mask
  }
}

/// $O(n \cdot N^2)$ Partition the grid points into interior and boundary
/// points of `polygon`.
///
/// Points are visited with `x` as the outer loop and `y` as the inner loop, so
/// both lists come out in that order. Vertices are skipped; they are counted
/// through the polygon itself.
///
/// ```
/// # use lattice_picks::algorithms::classify;
/// # use lattice_picks::data::{Grid, Point, Polygon};
/// let triangle = Polygon::new(vec![
///   Point::new([0, 0]),
///   Point::new([2, 0]),
///   Point::new([0, 2]),
/// ]).unwrap();
/// let points = classify(&triangle, &Grid::default());
/// assert!(points.interior.is_empty());
/// assert_eq!(
///   points.boundary,
///   vec![Point::new([0, 1]), Point::new([1, 0]), Point::new([1, 1])]
/// );
/// ```
pub fn classify(polygon: &Polygon, grid: &Grid) -> LatticePoints {
  let mut points = LatticePoints::default();
  for pt in grid.points() {
    match polygon.locate(&pt) {
      Classification::Boundary => points.boundary.push(pt),
      Classification::Interior => points.interior.push(pt),
      Classification::Vertex | Classification::Exterior => {}
    }
  }
  log::debug!(
    "classified {} grid points: {} interior, {} boundary, {} vertices",
    grid.side() * grid.side(),
    points.interior.len(),
    points.boundary.len(),
    polygon.len()
  );
  points
}

/// $O(n \cdot N^2)$ Classification of every grid point.
pub fn classify_grid(polygon: &Polygon, grid: &Grid) -> LatticeMap {
  let cells = grid.points().map(|pt| polygon.locate(&pt)).collect();
  LatticeMap::new(*grid, cells)
}
