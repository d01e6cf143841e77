use super::intersection::intersects;
use super::lattice::classify;
use crate::data::{Grid, LatticeMask, Point, Polygon, Segment};

/// $O(N^4 \cdot S)$ Split the interior of `polygon` into non-crossing segments
/// between enclosed lattice points.
///
/// The result starts with the polygon's own edges, in vertex order. Candidate
/// segments are then tried one by one (see [`candidates`]) and a candidate is
/// kept when:
///
/// * its endpoints differ,
/// * its midpoint is inside the polygon,
/// * both endpoints are enclosed lattice points (vertex, boundary or interior),
/// * it does not [intersect](super::intersects) any segment kept before it.
///
/// The outcome depends on the candidate order. It is a planar subdivision
/// meant for display; it is not guaranteed to be a full triangulation, nor
/// minimal, nor unique. `S` is the number of kept segments.
///
/// ```
/// # use lattice_picks::algorithms::split;
/// # use lattice_picks::data::{Grid, Point, Polygon, Segment};
/// let square = Polygon::new(vec![
///   Point::new([0, 0]),
///   Point::new([1, 0]),
///   Point::new([1, 1]),
///   Point::new([0, 1]),
/// ]).unwrap();
/// let segments = split(&square, &Grid::default());
/// assert_eq!(segments.len(), 5);
/// assert_eq!(segments[4], Segment::from((0, 0)..=(1, 1)));
/// ```
pub fn split(polygon: &Polygon, grid: &Grid) -> Vec<Segment> {
  let mask = classify(polygon, grid).mask(grid, polygon);
  let seeds: Vec<Segment> = polygon.iter_boundary_edges().collect();
  let n_seeds = seeds.len();
  let segments = candidates(grid, &mask).fold(seeds, |mut accepted, candidate| {
    if admissible(polygon, &mask, &accepted, &candidate) {
      log::trace!("accepted split segment {}", candidate);
      accepted.push(candidate);
    }
    accepted
  });
  log::debug!(
    "split polygon with {} vertices into {} segments ({} added)",
    polygon.len(),
    segments.len(),
    segments.len() - n_seeds
  );
  segments
}

/// Candidate segments in the order [`split`] tries them.
///
/// First the unit grid edges: for `x` in `0..N`, `y` in `0..N`, the edge to
/// `(x+1, y)` and then the edge to `(x, y+1)`. Then, for every point of `mask`
/// in row-major order, the segment to every grid point in row-major order.
pub fn candidates<'a>(grid: &Grid, mask: &'a LatticeMask) -> impl Iterator<Item = Segment> + 'a {
  let size = grid.size();
  let grid = *grid;
  let unit_edges = (0..size).flat_map(move |x| {
    (0..size).flat_map(move |y| {
      let pt = Point::new([x, y]);
      vec![
        Segment::new(pt, Point::new([x + 1, y])),
        Segment::new(pt, Point::new([x, y + 1])),
      ]
    })
  });
  let all_pairs = grid
    .points()
    .filter(move |src| mask.contains(src))
    .flat_map(move |src| grid.points().map(move |dst| Segment::new(src, dst)));
  unit_edges.chain(all_pairs)
}

fn admissible(
  polygon: &Polygon,
  mask: &LatticeMask,
  accepted: &[Segment],
  candidate: &Segment,
) -> bool {
  !candidate.is_degenerate()
    && polygon.is_inside(candidate.midpoint())
    && mask.contains(&candidate.src)
    && mask.contains(&candidate.dst)
    && !accepted.iter().any(|seg| intersects(candidate, seg))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::{counts, segment_conflicts};
  use crate::testing::*;

  use test_strategy::proptest;

  fn polygon(pts: &[(i32, i32)]) -> Polygon {
    Polygon::new_unchecked(pts.iter().map(|&pt| Point::from(pt)).collect())
  }

  #[proptest(cases = 16)]
  fn seeds_come_first(#[strategy(any_convex_polygon(Grid::default()))] poly: Polygon) {
    let segments = split(&poly, &Grid::default());
    let seeds: Vec<Segment> = poly.iter_boundary_edges().collect();
    assert_eq!(&segments[..seeds.len()], &seeds[..]);
  }

  #[proptest(cases = 16)]
  fn added_segments_do_not_conflict(
    #[strategy(any_convex_polygon(Grid::default()))] poly: Polygon,
  ) {
    let segments = split(&poly, &Grid::default());
    let conflicts: Vec<(usize, usize)> = segment_conflicts(&segments)
      .filter(|&(later, _)| later >= poly.len())
      .collect();
    assert!(conflicts.is_empty(), "{:?}", conflicts);
  }

  #[proptest(cases = 16)]
  fn added_segments_stay_inside(#[strategy(any_convex_polygon(Grid::default()))] poly: Polygon) {
    let grid = Grid::default();
    let mask = classify(&poly, &grid).mask(&grid, &poly);
    for seg in &split(&poly, &grid)[poly.len()..] {
      assert!(mask.contains(&seg.src) && mask.contains(&seg.dst));
      assert!(poly.is_inside(seg.midpoint()));
    }
  }

  #[proptest(cases = 16)]
  fn split_is_idempotent(#[strategy(any_convex_polygon(Grid::default()))] poly: Polygon) {
    let grid = Grid::default();
    assert_eq!(split(&poly, &grid), split(&poly, &grid));
  }

  #[test]
  fn candidate_order() {
    let grid = Grid::new(1).unwrap();
    let mut mask = LatticeMask::new(grid);
    mask.insert(&Point::new([1, 0]));
    let cands: Vec<Segment> = candidates(&grid, &mask).collect();
    assert_eq!(
      cands,
      vec![
        Segment::from((0, 0)..=(1, 0)),
        Segment::from((0, 0)..=(0, 1)),
        Segment::from((1, 0)..=(0, 0)),
        Segment::from((1, 0)..=(0, 1)),
        Segment::from((1, 0)..=(1, 0)),
        Segment::from((1, 0)..=(1, 1)),
      ]
    );
  }

  #[test]
  fn unit_square() {
    let poly = polygon(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
    let segments = split(&poly, &Grid::default());
    assert_eq!(
      segments,
      vec![
        Segment::from((0, 0)..=(1, 0)),
        Segment::from((1, 0)..=(1, 1)),
        Segment::from((1, 1)..=(0, 1)),
        Segment::from((0, 1)..=(0, 0)),
        Segment::from((0, 0)..=(1, 1)),
      ]
    );
  }

  #[test]
  fn right_triangle() {
    let poly = polygon(&[(0, 0), (2, 0), (0, 2)]);
    let segments = split(&poly, &Grid::default());
    assert_eq!(&segments[..3], &poly.iter_boundary_edges().collect::<Vec<_>>()[..]);
    assert!(segments.contains(&Segment::from((0, 1)..=(1, 1))));
    assert!(segments.contains(&Segment::from((1, 0)..=(1, 1))));
    assert!(segments.contains(&Segment::from((0, 0)..=(1, 1))));
    // Crosses the diagonal accepted before it.
    assert!(!segments.contains(&Segment::from((0, 1)..=(1, 0))));
    assert_eq!(counts(&poly, &Grid::default()).triangle_count, 4);
  }

  #[test]
  fn duplicate_vertices_do_not_panic() {
    let poly = polygon(&[(0, 0), (0, 0), (3, 0), (0, 3)]);
    let segments = split(&poly, &Grid::default());
    assert_eq!(segments[0], Segment::from((0, 0)..=(0, 0)));
    assert!(segments.len() > 4);
  }

  #[test]
  fn exterior_polygon_adds_nothing() {
    let poly = polygon(&[(0, 0), (3, 0), (6, 0)]);
    let segments = split(&poly, &Grid::default());
    assert_eq!(segments.len(), 3);
  }
}
