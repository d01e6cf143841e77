/// Conflict test between two shapes. `None` means the shapes may coexist.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
