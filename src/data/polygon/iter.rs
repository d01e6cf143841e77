use crate::data::Point;
use crate::data::Segment;

pub struct Iter<'a> {
  pub(crate) iter: std::slice::Iter<'a, Point>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a Point;
  fn next(&mut self) -> Option<&'a Point> {
    self.iter.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl ExactSizeIterator for Iter<'_> {}

pub struct EdgeIter<'a> {
  pub(crate) vertices: &'a [Point],
  pub(crate) idx: usize,
}

impl<'a> Iterator for EdgeIter<'a> {
  type Item = Segment;
  fn next(&mut self) -> Option<Segment> {
    let src = *self.vertices.get(self.idx)?;
    self.idx += 1;
    let dst = self.vertices[self.idx % self.vertices.len()];
    Some(Segment::new(src, dst))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.vertices.len().saturating_sub(self.idx);
    (len, Some(len))
  }
}

impl ExactSizeIterator for EdgeIter<'_> {}
