//! Areas: non-negative `Size` and axis-aligned `Bounds`.
//!
//! `Bounds` carries the layout toolkit: alignment, constraining to an aspect
//! ratio, splitting into strips, tiling and grids of cells.

mod bounds;
mod size;

pub use bounds::{Alignment, Bounds};
pub use size::Size;
