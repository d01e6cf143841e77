use num::integer::gcd;

use super::lattice::classify;
use crate::data::{Grid, Polygon};

/// Lattice counts of a polygon and the quantities Pick's theorem derives from
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PicksCounts {
  pub interior_count: usize,
  /// Includes the polygon's vertices.
  pub boundary_count: usize,
  /// `interior + boundary / 2 - 1`.
  pub area: f64,
  /// `2 * interior + boundary - 2`, the number of triangles in a
  /// triangulation that uses every enclosed lattice point as a vertex.
  pub triangle_count: i64,
}

impl PicksCounts {
  pub fn new(interior_count: usize, boundary_count: usize) -> PicksCounts {
    let interior = interior_count as f64;
    let boundary = boundary_count as f64;
    PicksCounts {
      interior_count,
      boundary_count,
      area: interior + boundary / 2.0 - 1.0,
      triangle_count: 2 * interior_count as i64 + boundary_count as i64 - 2,
    }
  }

  /// $O(n)$ Counts derived from the vertices alone: the boundary count is the
  /// sum of `gcd(|dx|, |dy|)` over the edges, the area is the shoelace area and
  /// the interior count follows from Pick's theorem.
  ///
  /// Only meaningful for simple polygons without repeated vertices; it serves
  /// as a cross-check for [`counts`].
  pub fn from_shoelace(polygon: &Polygon) -> PicksCounts {
    let boundary: i64 = polygon
      .iter_boundary_edges()
      .map(|edge| {
        let dx = i64::from(edge.dst.x_coord()) - i64::from(edge.src.x_coord());
        let dy = i64::from(edge.dst.y_coord()) - i64::from(edge.src.y_coord());
        gcd(dx, dy)
      })
      .sum();
    let area_2x = polygon.signed_area_2x().abs();
    // 2A = 2I + B - 2
    let interior = (area_2x - boundary + 2) / 2;
    PicksCounts::new(interior.max(0) as usize, boundary as usize)
  }
}

/// $O(n \cdot N^2)$ Count the lattice points of `polygon` on `grid` and derive
/// its area and triangle count.
///
/// ```
/// # use lattice_picks::algorithms::counts;
/// # use lattice_picks::data::{Grid, Point, Polygon};
/// let square = Polygon::new(vec![
///   Point::new([0, 0]),
///   Point::new([1, 0]),
///   Point::new([1, 1]),
///   Point::new([0, 1]),
/// ]).unwrap();
/// let picks = counts(&square, &Grid::default());
/// assert_eq!(picks.interior_count, 0);
/// assert_eq!(picks.boundary_count, 4);
/// assert_eq!(picks.area, 1.0);
/// assert_eq!(picks.triangle_count, 2);
/// ```
pub fn counts(polygon: &Polygon, grid: &Grid) -> PicksCounts {
  let points = classify(polygon, grid);
  PicksCounts::new(points.interior.len(), points.boundary.len() + polygon.len())
}
