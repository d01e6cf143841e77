use rand::distributions::uniform::SampleRange;
use rand::Rng;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;
use std::str::FromStr;

use crate::Error;

/// A lattice point. Equality is exact and component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point {
  pub array: [i32; 2],
}

impl Point {
  pub const fn new(array: [i32; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> i32 {
    self.array[0]
  }

  pub fn y_coord(&self) -> i32 {
    self.array[1]
  }

  /// Coordinates as IEEE-754 doubles, the representation every floating
  /// predicate in this crate works on.
  pub fn to_f64(&self) -> [f64; 2] {
    [f64::from(self.array[0]), f64::from(self.array[1])]
  }

  /// Midpoint of `self` and `other`. Lattice midpoints are exact in `f64`.
  pub fn midpoint(&self, other: &Point) -> [f64; 2] {
    let [x1, y1] = self.to_f64();
    let [x2, y2] = other.to_f64();
    [(x1 + x2) / 2.0, (y1 + y2) / 2.0]
  }

  pub(crate) fn random<R, S>(range: S, rng: &mut R) -> Point
  where
    R: Rng + ?Sized,
    S: SampleRange<i32> + Clone,
  {
    Point::new([rng.gen_range(range.clone()), rng.gen_range(range)])
  }
}

impl Index<usize> for Point {
  type Output = i32;
  fn index(&self, key: usize) -> &i32 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [i32; 2];
  fn deref(&self) -> &[i32; 2] {
    &self.array
  }
}

impl From<(i32, i32)> for Point {
  fn from(point: (i32, i32)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[i32; 2]> for Point {
  fn from(array: [i32; 2]) -> Point {
    Point { array }
  }
}

/// Formats as `x,y`, the line format of a point list.
impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{},{}", self.array[0], self.array[1])
  }
}

/// Parses a single `x,y` line. Whitespace around either number is ignored.
impl FromStr for Point {
  type Err = Error;
  fn from_str(s: &str) -> Result<Point, Error> {
    parse_line(s).ok_or(Error::MalformedPoint { line: 1 })
  }
}

pub(crate) fn parse_line(line: &str) -> Option<Point> {
  let mut parts = line.split(',');
  let x = parts.next()?.trim().parse().ok()?;
  let y = parts.next()?.trim().parse().ok()?;
  if parts.next().is_some() {
    return None;
  }
  Some(Point::new([x, y]))
}
