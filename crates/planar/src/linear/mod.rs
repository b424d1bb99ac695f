//! Linear building blocks: 2D `Vector` and the row-major `Matrix` grid.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

#[cfg(test)]
mod tests;
