use crate::data::Segment;
use crate::Intersects;

/// May `candidate` NOT be added while `accepted` is present?
///
/// See the [`Intersects`] implementation on [`Segment`] for the exact rules.
/// The test is not symmetric in general: colinear segments are compared along
/// the candidate's direction.
pub fn intersects(candidate: &Segment, accepted: &Segment) -> bool {
  candidate.intersect(accepted).is_some()
}

/// Find every pair `(later, earlier)` of `segments` where the later segment
/// conflicts with the earlier one.
///
/// # Time complexity
/// $O(n^2)$
pub fn segment_conflicts(segments: &[Segment]) -> impl Iterator<Item = (usize, usize)> + '_ {
  pairs(segments.len()).filter(move |&(a, b)| intersects(&segments[a], &segments[b]))
}

fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
  (0..n).flat_map(move |a| (0..a).map(move |b| (a, b)))
}
