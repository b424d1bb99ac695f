//! Points in the plane and their elementary moves.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::areas::Size;
use crate::coordinate::Coordinate;
use crate::linear::Vector;
use crate::sequence::linspace;

/// Position in the plane. Serialized as `{x, y}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point<T> {
    pub vector: Vector<T>,
}

impl<T> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self {
            vector: Vector::new(x, y),
        }
    }
}

impl<T: Copy> Point<T> {
    #[inline]
    pub fn x(&self) -> T {
        self.vector.x
    }
    #[inline]
    pub fn y(&self) -> T {
        self.vector.y
    }
}

/// Moves that can leave the first quadrant (`flip*`, `center*`) need a `T` that
/// can hold the result; with unsigned coordinates a negative result overflows.
impl<T: Coordinate> Point<T> {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x() == T::ZERO && self.y() == T::ZERO
    }

    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        Point::new(self.x() * factor, self.y() * factor)
    }

    #[inline]
    pub fn scale_xy(&self, factor: Size<T>) -> Self {
        Point::new(self.x() * factor.width(), self.y() * factor.height())
    }

    /// Point reflection through `origin`.
    #[inline]
    pub fn flip(&self, origin: Point<T>) -> Self {
        Point::new(
            origin.x() + origin.x() - self.x(),
            origin.y() + origin.y() - self.y(),
        )
    }

    /// Mirror across the vertical line `x = origin`.
    #[inline]
    pub fn flip_x(&self, origin: T) -> Self {
        Point::new(origin + origin - self.x(), self.y())
    }

    /// Mirror across the horizontal line `y = origin`.
    #[inline]
    pub fn flip_y(&self, origin: T) -> Self {
        Point::new(self.x(), origin + origin - self.y())
    }

    #[inline]
    pub fn shift(&self, size: Size<T>) -> Self {
        *self + size
    }

    /// Top-left corner of a region of `size` centred on this point.
    #[inline]
    pub fn center(&self, size: Size<T>) -> Self {
        Point::new(self.x() - size.width().halve(), self.y() - size.height().halve())
    }

    #[inline]
    pub fn center_horizontal(&self, size: Size<T>) -> Self {
        Point::new(self.x() - size.width().halve(), self.y())
    }

    #[inline]
    pub fn center_vertical(&self, size: Size<T>) -> Self {
        Point::new(self.x(), self.y() - size.height().halve())
    }

    /// Offset from the origin read as a size (negative components clamp to zero).
    #[inline]
    pub fn projection(&self) -> Size<T> {
        Size::new(self.x(), self.y())
    }

    /// Euclidean distance, computed in `f64` so unsigned coordinates never underflow.
    #[inline]
    pub fn distance(&self, other: Point<T>) -> f64 {
        Vector2::new(
            other.x().to_f64() - self.x().to_f64(),
            other.y().to_f64() - self.y().to_f64(),
        )
        .norm()
    }
}

impl Point<f64> {
    /// One point per height with x spread evenly over `[start, end]`.
    pub fn linspace(heights: &[f64], start: f64, end: f64) -> Vec<Point<f64>> {
        linspace(start, end, heights.len())
            .into_iter()
            .zip(heights)
            .map(|(x, &y)| Point::new(x, y))
            .collect()
    }
}

impl<T> From<Vector<T>> for Point<T> {
    #[inline]
    fn from(vector: Vector<T>) -> Self {
        Self { vector }
    }
}

impl<T: Coordinate> Add<Vector<T>> for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn add(self, rhs: Vector<T>) -> Self::Output {
        Point::from(self.vector + rhs)
    }
}

impl<T: Coordinate> Sub<Vector<T>> for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn sub(self, rhs: Vector<T>) -> Self::Output {
        Point::from(self.vector - rhs)
    }
}

impl<T: Coordinate> Add<Size<T>> for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn add(self, rhs: Size<T>) -> Self::Output {
        Point::new(self.x() + rhs.width(), self.y() + rhs.height())
    }
}

impl<T: Coordinate> Sub<Size<T>> for Point<T> {
    type Output = Point<T>;
    #[inline]
    fn sub(self, rhs: Size<T>) -> Self::Output {
        Point::new(self.x() - rhs.width(), self.y() - rhs.height())
    }
}

/// Displacement between two points.
impl<T: Coordinate> Sub for Point<T> {
    type Output = Vector<T>;
    #[inline]
    fn sub(self, rhs: Point<T>) -> Self::Output {
        self.vector - rhs.vector
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vector, f)
    }
}
