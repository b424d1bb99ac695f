//! Index bookkeeping and rigid transformations.
//!
//! - `Dimensions`: row/column counts of a grid.
//! - `Slice`: half-open index range used to select rows or columns.
//! - `Transformation`: optional horizontal flip plus a rotation.

mod dimensions;
mod slice;
mod transformation;

pub use dimensions::Dimensions;
pub use slice::Slice;
pub use transformation::Transformation;
