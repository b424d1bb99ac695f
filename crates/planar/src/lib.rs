//! Planar geometry structures and transformations.
//!
//! Layout
//! - `scalar`: index bookkeeping (`Dimensions`, `Slice`) and `Transformation`.
//! - `linear`: `Vector` and the row-major `Matrix` grid.
//! - `points`: `Point`, `Segment` and cubic `Bezier` curves.
//! - `areas`: non-negative `Size` and axis-aligned `Bounds` with layout helpers.
//!
//! Screen conventions: x grows to the right, y grows downwards, so the "top-left"
//! corner of a `Bounds` is its `point`.

pub mod areas;
pub mod coordinate;
pub mod error;
pub mod linear;
pub mod points;
pub mod scalar;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use areas::{Alignment, Bounds, Size};
pub use coordinate::Coordinate;
pub use error::PlanarError;
pub use linear::{Matrix, Vector};
pub use points::{Bezier, FitCfg, Point, Segment};
pub use scalar::{Dimensions, Slice, Transformation};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::areas::{Alignment, Bounds, Size};
    pub use crate::coordinate::Coordinate;
    pub use crate::error::PlanarError;
    pub use crate::linear::{Matrix, Vector};
    pub use crate::points::{Bezier, FitCfg, Point, Segment};
    pub use crate::scalar::{Dimensions, Slice, Transformation};
}
