pub mod intersection;
pub mod lattice;
pub mod picks;
pub mod point_location;
pub mod split;

#[doc(inline)]
pub use intersection::{intersects, segment_conflicts};

#[doc(inline)]
pub use lattice::{classify, classify_grid, LatticePoints};

#[doc(inline)]
pub use picks::{counts, PicksCounts};

#[doc(inline)]
pub use split::split;
