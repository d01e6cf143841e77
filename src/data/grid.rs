use super::{Point, Polygon};
use crate::{Error, DEFAULT_GRID_SIZE};

/// The square lattice `[0,size]×[0,size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
  size: i32,
}

impl Default for Grid {
  fn default() -> Grid {
    Grid {
      size: DEFAULT_GRID_SIZE,
    }
  }
}

impl Grid {
  pub fn new(size: i32) -> Result<Grid, Error> {
    if size < 1 {
      return Err(Error::InvalidGridSize);
    }
    Ok(Grid { size })
  }

  pub fn size(&self) -> i32 {
    self.size
  }

  /// Number of points along one axis, `size + 1`.
  pub fn side(&self) -> usize {
    self.size as usize + 1
  }

  pub fn contains(&self, pt: &Point) -> bool {
    (0..=self.size).contains(&pt.x_coord()) && (0..=self.size).contains(&pt.y_coord())
  }

  /// Every lattice point in row-major order: `x` is the outer loop, `y` the
  /// inner one.
  pub fn points(&self) -> impl Iterator<Item = Point> {
    let size = self.size;
    (0..=size).flat_map(move |x| (0..=size).map(move |y| Point::new([x, y])))
  }

  /// Check that every vertex of `polygon` lies on this grid. The engine itself
  /// never calls this.
  pub fn check(&self, polygon: &Polygon) -> Result<(), Error> {
    if polygon.iter().all(|pt| self.contains(pt)) {
      Ok(())
    } else {
      Err(Error::OutOfBounds)
    }
  }

  fn offset(&self, pt: &Point) -> Option<usize> {
    if self.contains(pt) {
      Some(pt.x_coord() as usize * self.side() + pt.y_coord() as usize)
    } else {
      None
    }
  }
}

/// Boolean membership table over the points of a [`Grid`].
#[derive(Debug, Clone)]
pub struct LatticeMask {
  grid: Grid,
  cells: Vec<bool>,
}

impl LatticeMask {
  pub fn new(grid: Grid) -> LatticeMask {
    LatticeMask {
      grid,
      cells: vec![false; grid.side() * grid.side()],
    }
  }

  /// Mark `pt`. Points outside the grid are ignored and `false` is returned.
  pub fn insert(&mut self, pt: &Point) -> bool {
    match self.grid.offset(pt) {
      Some(idx) => {
        self.cells[idx] = true;
        true
      }
      None => {
        log::warn!("ignoring point {} outside of the {:?}", pt, self.grid);
        false
      }
    }
  }

  pub fn contains(&self, pt: &Point) -> bool {
    self.grid.offset(pt).map_or(false, |idx| self.cells[idx])
  }

  pub fn len(&self) -> usize {
    self.cells.iter().filter(|&&cell| cell).count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }
}

impl<'a> Extend<&'a Point> for LatticeMask {
  fn extend<I: IntoIterator<Item = &'a Point>>(&mut self, iter: I) {
    for pt in iter {
      self.insert(pt);
    }
  }
}
