use std::collections::BTreeSet;

use crate::data::Point;
use crate::Error;

mod iter;
pub use iter::*;

mod convex;

mod text;

/// A closed polygon on the integer lattice. The last vertex connects back to
/// the first.
///
/// The lattice algorithms take any vertex list, including degenerate ones.
/// Only [`Polygon::new`] validates its input, and even it does not check that
/// the edges are free of self-intersections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
  pub(crate) vertices: Vec<Point>,
}

impl Polygon {
  pub fn new_unchecked(vertices: Vec<Point>) -> Polygon {
    Polygon { vertices }
  }

  pub fn new(points: Vec<Point>) -> Result<Polygon, Error> {
    let p = Self::new_unchecked(points);
    p.validate()?;
    Ok(p)
  }

  /// At least three vertices, none of them repeated.
  pub fn validate(&self) -> Result<(), Error> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    let mut seen = BTreeSet::new();
    for pt in self.iter() {
      if !seen.insert(pt) {
        return Err(Error::DuplicatePoints);
      }
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point {
    &self.vertices[idx]
  }

  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      iter: self.vertices.iter(),
    }
  }

  /// Edges in vertex order: `v0 → v1`, `v1 → v2`, ..., `vn → v0`.
  pub fn iter_boundary_edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      vertices: &self.vertices,
      idx: 0,
    }
  }

  /// Twice the signed shoelace area. Positive for counter-clockwise polygons.
  pub fn signed_area_2x(&self) -> i64 {
    self
      .iter_boundary_edges()
      .map(|edge| {
        let [px, py] = edge.src.array;
        let [qx, qy] = edge.dst.array;
        i64::from(px) * i64::from(qy) - i64::from(qx) * i64::from(py)
      })
      .sum()
  }
}
