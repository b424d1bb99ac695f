//! Plain 2D vector with lexicographic ordering.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::coordinate::Coordinate;

/// 2D vector `(x, y)`.
///
/// Ordering is lexicographic: `x` first, then `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Hash, Serialize, Deserialize)]
pub struct Vector<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coordinate> Vector<T> {
    /// Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        Vector2::new(self.x.to_f64(), self.y.to_f64()).norm()
    }
}

impl<T: Coordinate> Add for Vector<T> {
    type Output = Vector<T>;
    #[inline]
    fn add(self, rhs: Vector<T>) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coordinate> Sub for Vector<T> {
    type Output = Vector<T>;
    #[inline]
    fn sub(self, rhs: Vector<T>) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Coordinate> Mul<T> for Vector<T> {
    type Output = Vector<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Coordinate> Div<T> for Vector<T> {
    type Output = Vector<T>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {}, y: {}}}", self.x, self.y)
    }
}

impl<T: Coordinate> From<Vector2<T>> for Vector<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl<T: Coordinate> From<Vector<T>> for Vector2<T> {
    #[inline]
    fn from(v: Vector<T>) -> Self {
        Vector2::new(v.x, v.y)
    }
}
