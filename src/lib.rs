// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Lattice point classification, Pick's theorem counts and split views for
//! polygons whose vertices lie on a small integer grid.
//!
//! ```
//! use lattice_picks::algorithms::{counts, split};
//! use lattice_picks::data::{Grid, Point, Polygon};
//!
//! let triangle = Polygon::new(vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([0, 2]),
//! ]).unwrap();
//! let grid = Grid::default();
//!
//! let picks = counts(&triangle, &grid);
//! assert_eq!(picks.interior_count, 1);
//! assert_eq!(picks.boundary_count, 8);
//! assert_eq!(picks.area, 4.0);
//!
//! let segments = split(&triangle, &grid);
//! assert!(segments.len() >= 3);
//! ```

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;

pub use intersection::Intersects;
pub use orientation::Orientation;

/// Side length of the lattice used when no other grid is configured. A grid
/// of size 10 holds the 11×11 points `[0,10]×[0,10]`.
pub const DEFAULT_GRID_SIZE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  DuplicatePoints,
  /// A line of a point list is not two comma-separated integers. Lines are
  /// numbered from 1.
  MalformedPoint {
    line: usize,
  },
  InvalidGridSize,
  /// A vertex lies outside the lattice of the grid.
  OutOfBounds,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::MalformedPoint { line } => {
        write!(f, "Malformed point on line {}, expected 'x,y'", line)
      }
      Error::InvalidGridSize => write!(f, "Grid size must be at least 1"),
      Error::OutOfBounds => write!(f, "Vertex outside of the grid"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
