//! Positions and curves: `Point`, `Segment` and cubic `Bezier`.

mod bezier;
mod point;
mod segment;

pub use bezier::{Bezier, FitCfg};
pub use point::Point;
pub use segment::Segment;
