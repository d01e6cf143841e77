use std::fmt;
use std::ops::RangeInclusive;

use super::Point;
use crate::Intersects;

///////////////////////////////////////////////////////////////////////////////
// Segment

/// A segment between two lattice points.
///
/// Equality ignores the direction, `a..=b` equals `b..=a`. The direction is
/// still stored because the conflict test reads specific endpoints when it
/// computes intercepts and range checks.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
  pub src: Point,
  pub dst: Point,
}

impl Segment {
  pub const fn new(src: Point, dst: Point) -> Segment {
    Segment { src, dst }
  }

  pub fn is_degenerate(&self) -> bool {
    self.src == self.dst
  }

  pub fn has_common_point(&self, other: &Segment) -> bool {
    self.src == other.src || self.src == other.dst || self.dst == other.src || self.dst == other.dst
  }

  /// `f64::INFINITY` for vertical (and zero-length) segments.
  pub fn slope(&self) -> f64 {
    if self.src.x_coord() == self.dst.x_coord() {
      return f64::INFINITY;
    }
    let [x1, y1] = self.src.to_f64();
    let [x2, y2] = self.dst.to_f64();
    (y1 - y2) / (x1 - x2)
  }

  pub fn midpoint(&self) -> [f64; 2] {
    self.src.midpoint(&self.dst)
  }
}

impl PartialEq for Segment {
  fn eq(&self, other: &Segment) -> bool {
    (self.src == other.src && self.dst == other.dst)
      || (self.src == other.dst && self.dst == other.src)
  }
}

impl Eq for Segment {}

impl From<RangeInclusive<Point>> for Segment {
  fn from(range: RangeInclusive<Point>) -> Segment {
    let (src, dst) = range.into_inner();
    Segment::new(src, dst)
  }
}

impl From<RangeInclusive<(i32, i32)>> for Segment {
  fn from(range: RangeInclusive<(i32, i32)>) -> Segment {
    let (src, dst) = range.into_inner();
    Segment::new(src.into(), dst.into())
  }
}

impl fmt::Display for Segment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({})-({})", self.src, self.dst)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Conflict

/// Why a candidate segment may not be added next to an accepted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
  /// Both segments have the same endpoints.
  Duplicate,
  /// Equal slope and intercept, and an endpoint lies inside the other range.
  Overlap,
  /// The lines meet strictly inside both segments.
  Crossing,
}

// (a < m) == (m < b). True when m is strictly between a and b, and also when
// m is at or beyond both of them on the same side as a == b.
fn between<T: PartialOrd>(a: T, m: T, b: T) -> bool {
  (a < m) == (m < b)
}

fn y_intercept(pt: &Point, slope: f64) -> f64 {
  let [x, y] = pt.to_f64();
  y - x * slope
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

/// Conservative conflict test between a candidate (`self`) and an already
/// accepted segment (`other`).
///
/// Slopes, intercepts and the intersection abscissa are IEEE-754 doubles.
/// A vertical segment has slope `+∞`, so its intercept `y - x·∞` is `-∞` for
/// `x > 0` and NaN for `x == 0`. Those values take part in the comparisons as
/// they are: two vertical segments right of the y-axis compare as colinear.
///
/// Touching at a shared endpoint is not a conflict unless the segments are
/// colinear and overlap.
impl<'a> Intersects for &'a Segment {
  type Result = Conflict;
  fn intersect(self, other: &'a Segment) -> Option<Conflict> {
    if self == other {
      return Some(Conflict::Duplicate);
    }

    let mut line1 = self;
    let mut line2 = other;
    let mut slope1 = line1.slope();
    let mut slope2 = line2.slope();
    let mut yint1 = y_intercept(&line1.src, slope1);
    let mut yint2 = y_intercept(&line2.dst, slope2);

    if slope1 == slope2 {
      if yint1 != yint2 {
        return None;
      }
      let overlap = if slope1 == 0.0 {
        let (a, b) = (line1.src.x_coord(), line1.dst.x_coord());
        between(a, line2.src.x_coord(), b) || between(a, line2.dst.x_coord(), b)
      } else {
        let (a, b) = (line1.src.y_coord(), line1.dst.y_coord());
        between(a, line2.src.y_coord(), b) || between(a, line2.dst.y_coord(), b)
      };
      return if overlap {
        Some(Conflict::Overlap)
      } else {
        None
      };
    }

    if line1.has_common_point(line2) {
      return None;
    }

    let crossing = if slope1.is_infinite() != slope2.is_infinite() {
      // Make line1 the vertical one.
      if slope2.is_infinite() {
        std::mem::swap(&mut line1, &mut line2);
        std::mem::swap(&mut slope1, &mut slope2);
        std::mem::swap(&mut yint1, &mut yint2);
      }
      let [x, y1] = line1.src.to_f64();
      let [_, y2] = line1.dst.to_f64();
      let y = slope2 * x + yint2;
      between(f64::from(line2.src.x_coord()), x, f64::from(line2.dst.x_coord()))
        && between(y1, y, y2)
    } else {
      let x = (yint2 - yint1) / (slope1 - slope2);
      between(f64::from(line1.src.x_coord()), x, f64::from(line1.dst.x_coord()))
        && between(f64::from(line2.src.x_coord()), x, f64::from(line2.dst.x_coord()))
    };
    if crossing {
      Some(Conflict::Crossing)
    } else {
      None
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use Conflict::*;

  use test_strategy::proptest;

  #[proptest]
  fn equality_ignores_direction(
    #[strategy(any_lattice_point())] a: Point,
    #[strategy(any_lattice_point())] b: Point,
  ) {
    assert_eq!(Segment::new(a, b), Segment::new(b, a));
    assert_eq!(Segment::new(a, b).intersect(&Segment::new(b, a)), Some(Duplicate));
  }

  #[proptest]
  fn flip_intersects_prop(
    #[strategy(any_exact_segment())] l1: Segment,
    #[strategy(any_exact_segment())] l2: Segment,
  ) {
    // Distinct slopes from {0, ±1, ∞} keep every intermediate value exact.
    if l1.slope() != l2.slope() {
      assert_eq!(l1.intersect(&l2).is_some(), l2.intersect(&l1).is_some());
    }
  }

  //             P6
  //
  // P7      P5
  //
  // P4  P2
  //
  // P1  P3
  //
  static P1: Point = Point::new([0, 0]);
  static P2: Point = Point::new([1, 1]);
  static P3: Point = Point::new([1, 0]);
  static P4: Point = Point::new([0, 1]);
  static P5: Point = Point::new([2, 2]);
  static P6: Point = Point::new([3, 3]);
  static P7: Point = Point::new([0, 2]);

  #[test]
  fn line_crossing() {
    assert_eq!(Segment::from(P1..=P2).intersect(&(P3..=P4).into()), Some(Crossing));
    assert_eq!(Segment::from(P3..=P4).intersect(&(P1..=P2).into()), Some(Crossing));
  }

  #[test]
  fn line_not_crossing() {
    assert_eq!(Segment::from(P1..=P3).intersect(&(P2..=P4).into()), None)
  }

  #[test]
  fn shared_endpoint_is_not_a_conflict() {
    assert_eq!(Segment::from(P1..=P2).intersect(&(P2..=P3).into()), None);
    assert_eq!(Segment::from(P1..=P2).intersect(&(P1..=P3).into()), None);
    assert_eq!(Segment::from(P1..=P7).intersect(&(P7..=P2).into()), None);
  }

  #[test]
  fn duplicates() {
    assert_eq!(Segment::from(P1..=P5).intersect(&(P5..=P1).into()), Some(Duplicate));
    let zero = Segment::from(P2..=P2);
    assert_eq!(zero.intersect(&zero), Some(Duplicate));
  }

  #[test]
  fn colinear_overlap() {
    assert_eq!(Segment::from(P1..=P5).intersect(&(P2..=P6).into()), Some(Overlap));
    assert_eq!(Segment::from(P1..=P6).intersect(&(P2..=P5).into()), Some(Overlap));
  }

  #[test]
  fn colinear_touching_end_to_end() {
    assert_eq!(Segment::from(P1..=P2).intersect(&(P2..=P5).into()), None);
    assert_eq!(Segment::from((0, 0)..=(1, 0)).intersect(&((1, 0)..=(2, 0)).into()), None);
  }

  #[test]
  fn colinear_containing() {
    // The longer candidate contains the accepted segment.
    let long = Segment::from((0, 0)..=(4, 0));
    let short = Segment::from((1, 0)..=(2, 0));
    assert_eq!(long.intersect(&short), Some(Overlap));
  }

  #[test]
  fn colinear_touch_depends_on_direction() {
    let reversed = Segment::from((1, 0)..=(0, 0));
    let forward = Segment::from((1, 0)..=(2, 0));
    assert_eq!(reversed.intersect(&forward), Some(Overlap));
    assert_eq!(forward.intersect(&reversed), None);
  }

  #[test]
  fn parallel_disjoint() {
    assert_eq!(Segment::from((0, 0)..=(2, 0)).intersect(&((0, 1)..=(2, 1)).into()), None);
    assert_eq!(Segment::from((0, 0)..=(2, 2)).intersect(&((1, 0)..=(3, 2)).into()), None);
  }

  #[test]
  fn vertical_crossing() {
    let vertical = Segment::from((1, 0)..=(1, 2));
    let horizontal = Segment::from((0, 1)..=(2, 1));
    let diagonal = Segment::from((0, 2)..=(2, 0));
    assert_eq!(vertical.intersect(&horizontal), Some(Crossing));
    assert_eq!(horizontal.intersect(&vertical), Some(Crossing));
    assert_eq!(vertical.intersect(&diagonal), Some(Crossing));
    assert_eq!(diagonal.intersect(&vertical), Some(Crossing));
  }

  #[test]
  fn vertical_missing() {
    let vertical = Segment::from((3, 0)..=(3, 2));
    let horizontal = Segment::from((0, 1)..=(2, 1));
    assert_eq!(vertical.intersect(&horizontal), None);
    assert_eq!(horizontal.intersect(&vertical), None);
    let above = Segment::from((2, 5)..=(4, 5));
    assert_eq!(vertical.intersect(&above), None);
  }

  #[test]
  fn t_junction_is_not_a_crossing() {
    let vertical = Segment::from((1, 0)..=(1, 2));
    let touching = Segment::from((1, 1)..=(3, 1));
    assert_eq!(vertical.intersect(&touching), None);
    assert_eq!(touching.intersect(&vertical), None);
  }

  #[test]
  fn verticals_right_of_the_axis_share_an_intercept() {
    // Both intercepts are -∞, so the segments are treated as colinear and the
    // y-ranges decide.
    let a = Segment::from((2, 0)..=(2, 4));
    let b = Segment::from((5, 1)..=(5, 3));
    assert_eq!(a.intersect(&b), Some(Overlap));
    let c = Segment::from((5, 5)..=(5, 6));
    assert_eq!(a.intersect(&c), None);
  }

  #[test]
  fn verticals_on_the_axis_never_overlap() {
    // The intercept 0·∞ is NaN and compares unequal to everything.
    let a = Segment::from((0, 0)..=(0, 4));
    let b = Segment::from((0, 1)..=(0, 3));
    assert_eq!(a.intersect(&b), None);
    assert_eq!(b.intersect(&a), None);
  }

  #[test]
  fn zero_length_segments_do_not_panic() {
    let other = Segment::from((0, 0)..=(4, 4));
    // A zero-length segment behaves like a vertical one.
    let on_line = Segment::from((2, 2)..=(2, 2));
    assert_eq!(on_line.slope(), f64::INFINITY);
    assert_eq!(on_line.intersect(&other), Some(Crossing));
    assert_eq!(other.intersect(&on_line), Some(Crossing));
    let off_line = Segment::from((2, 3)..=(2, 3));
    assert_eq!(off_line.intersect(&other), None);
    assert_eq!(other.intersect(&off_line), None);
  }

  #[test]
  fn unit_1() {
    let l1 = Segment::from((1, 0)..=(1, 1));
    let l2 = Segment::from((0, 1)..=(2, 3));
    assert_eq!(l1.intersect(&l2), None)
  }

  #[test]
  fn unit_2() {
    let l1 = Segment::from((0, 0)..=(3, 1));
    let l2 = Segment::from((0, 1)..=(3, 0));
    assert_eq!(l1.intersect(&l2), Some(Crossing));
    assert_eq!(l2.intersect(&l1), Some(Crossing));
  }

  #[test]
  fn display() {
    assert_eq!(Segment::from((0, 1)..=(2, 3)).to_string(), "(0,1)-(2,3)");
  }
}
