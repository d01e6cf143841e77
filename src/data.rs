mod classification;
mod grid;
pub(crate) mod point;
pub mod polygon;
mod segment;

pub use classification::*;
pub use grid::*;
pub use segment::*;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Polygon};
pub use point::Point;
