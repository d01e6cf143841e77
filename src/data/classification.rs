use std::fmt;

use super::{Grid, Point};

/// Where a lattice point lies relative to a polygon.
///
/// The variants are ordered by precedence: a vertex is never reported as a
/// boundary point, and a boundary point is never reported as interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
  Vertex,
  Boundary,
  Interior,
  Exterior,
}

impl Classification {
  /// Inside the closed polygon: vertex, boundary or interior.
  pub fn is_enclosed(self) -> bool {
    !matches!(self, Classification::Exterior)
  }

  fn symbol(self) -> char {
    match self {
      Classification::Vertex => '@',
      Classification::Boundary => '+',
      Classification::Interior => 'o',
      Classification::Exterior => '.',
    }
  }
}

/// The classification of every point of a [`Grid`].
///
/// The `Display` output draws the lattice with `y = size` on the first line,
/// using `@` for vertices, `+` for boundary points, `o` for interior points and
/// `.` for everything else.
///
/// ```
/// # use lattice_picks::algorithms::classify_grid;
/// # use lattice_picks::data::{Grid, Point, Polygon};
/// let triangle = Polygon::new(vec![
///   Point::new([0, 0]),
///   Point::new([2, 0]),
///   Point::new([0, 2]),
/// ]).unwrap();
/// let map = classify_grid(&triangle, &Grid::new(3).unwrap());
/// let expected = "\
/// ....
/// @...
/// ++..
/// @+@.
/// ";
/// assert_eq!(map.to_string(), expected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeMap {
  grid: Grid,
  cells: Vec<Classification>,
}

impl LatticeMap {
  /// `cells` holds one entry per grid point in row-major order.
  pub(crate) fn new(grid: Grid, cells: Vec<Classification>) -> LatticeMap {
    debug_assert_eq!(cells.len(), grid.side() * grid.side());
    LatticeMap { grid, cells }
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  /// `None` for points off the grid.
  pub fn get(&self, pt: &Point) -> Option<Classification> {
    if !self.grid.contains(pt) {
      return None;
    }
    let idx = pt.x_coord() as usize * self.grid.side() + pt.y_coord() as usize;
    Some(self.cells[idx])
  }

  /// Points and their classification in row-major order.
  pub fn iter(&self) -> impl Iterator<Item = (Point, Classification)> + '_ {
    self.grid.points().zip(self.cells.iter().copied())
  }

  pub fn count(&self, class: Classification) -> usize {
    self.cells.iter().filter(|&&cell| cell == class).count()
  }
}

impl fmt::Display for LatticeMap {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let size = self.grid.size();
    for y in (0..=size).rev() {
      for x in 0..=size {
        let class = self
          .get(&Point::new([x, y]))
          .unwrap_or(Classification::Exterior);
        write!(f, "{}", class.symbol())?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}
