use crate::data::{Classification, Point, Polygon};

// Every edge as (a, b) = (v[i], v[i-1]), the pairing the ray-casting formulas
// below are written against.
fn edge_pairs(poly: &Polygon) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
  poly
    .iter_boundary_edges()
    .map(|edge| (edge.dst.to_f64(), edge.src.to_f64()))
}

impl Polygon {
  /// $O(n)$ Even-odd ray casting.
  ///
  /// An edge `(a, b)` flips the result when it straddles the vertical line
  /// through `pt` (`(a.x > x) != (b.x > x)`) and `pt` is on or below the edge
  /// at that `x`. A vertical edge never straddles, so its division by zero is
  /// never evaluated.
  ///
  /// Points exactly on the boundary get an arbitrary answer, use
  /// [`Polygon::locate`] for lattice points.
  pub fn is_inside(&self, pt: [f64; 2]) -> bool {
    let [x, y] = pt;
    let mut inside = false;
    for ([ax, ay], [bx, by]) in edge_pairs(self) {
      if (ax > x) != (bx > x) && y <= (by - ay) * (x - ax) / (bx - ax) + ay {
        inside = !inside;
      }
    }
    inside
  }

  /// $O(n)$ Does `pt` lie on an edge? Endpoints count.
  pub fn is_boundary(&self, pt: &Point) -> bool {
    let [x, y] = pt.to_f64();
    edge_pairs(self).any(|([ax, ay], [bx, by])| {
      let colinear = (ax > x) != (bx > x) && y == (by - ay) * (x - ax) / (bx - ax) + ay;
      let vertical = bx == ax && x == ax && (ay > y) != (by > y);
      let endpoint = (ax == x && ay == y) || (bx == x && by == y);
      colinear || vertical || endpoint
    })
  }

  /// $O(n)$
  pub fn is_vertex(&self, pt: &Point) -> bool {
    self.iter().any(|v| v == pt)
  }

  /// $O(n)$ Classify a lattice point. Vertex takes precedence over boundary,
  /// boundary over interior.
  pub fn locate(&self, pt: &Point) -> Classification {
    if self.is_vertex(pt) {
      Classification::Vertex
    } else if self.is_boundary(pt) {
      Classification::Boundary
    } else if self.is_inside(pt.to_f64()) {
      Classification::Interior
    } else {
      Classification::Exterior
    }
  }
}
