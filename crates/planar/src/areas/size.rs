//! Extents that never go negative.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::coordinate::Coordinate;
use crate::linear::Vector;

/// Width and height, each clamped at zero.
///
/// Invariants:
/// - `width >= 0` and `height >= 0` after every constructor and operator.
/// - Ordering is lexicographic: width first, then height.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Hash, Serialize)]
pub struct Size<T> {
    width: T,
    height: T,
}

impl<T: Coordinate> Size<T> {
    #[inline]
    pub fn new(width: T, height: T) -> Self {
        Self {
            width: width.non_negative(),
            height: height.non_negative(),
        }
    }

    #[inline]
    pub fn width(&self) -> T {
        self.width
    }
    #[inline]
    pub fn height(&self) -> T {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == T::ZERO && self.height == T::ZERO
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Size::new(self.height, self.width)
    }

    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        *self * factor
    }

    #[inline]
    pub fn scale_xy(&self, factor: Size<T>) -> Self {
        Size::new(self.width * factor.width, self.height * factor.height)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width.to_f64() * self.height.to_f64()
    }
}

impl<T: Coordinate> From<Vector<T>> for Size<T> {
    #[inline]
    fn from(v: Vector<T>) -> Self {
        Size::new(v.x, v.y)
    }
}

impl<T: Coordinate> Add for Size<T> {
    type Output = Size<T>;
    #[inline]
    fn add(self, rhs: Size<T>) -> Self::Output {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

/// Saturates at zero per component.
impl<T: Coordinate> Sub for Size<T> {
    type Output = Size<T>;
    #[inline]
    fn sub(self, rhs: Size<T>) -> Self::Output {
        let axis = |a: T, b: T| if a > b { a - b } else { T::ZERO };
        Size::new(axis(self.width, rhs.width), axis(self.height, rhs.height))
    }
}

impl<T: Coordinate> Mul<T> for Size<T> {
    type Output = Size<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

impl<T: Coordinate> Div<T> for Size<T> {
    type Output = Size<T>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Size::new(self.width / rhs, self.height / rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{width: {}, height: {}}}", self.width, self.height)
    }
}

impl<'de, T: Coordinate + Deserialize<'de>> Deserialize<'de> for Size<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<W> {
            width: W,
            height: W,
        }
        let raw = Raw::<T>::deserialize(deserializer)?;
        Ok(Size::new(raw.width, raw.height))
    }
}
