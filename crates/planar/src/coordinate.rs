//! Numeric element type shared by `Vector`, `Point`, `Size` and `Segment`.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Scalar usable as a planar coordinate.
///
/// Implemented for the common signed, unsigned and floating point primitives.
/// Every `Coordinate` is also an `nalgebra::Scalar`, so coordinates convert to
/// `Vector2` without extra bounds.
pub trait Coordinate:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn to_f64(self) -> f64;

    /// Clamp at zero. NaN passes through unchanged.
    #[inline]
    fn non_negative(self) -> Self {
        if self < Self::ZERO {
            Self::ZERO
        } else {
            self
        }
    }

    /// Half of the value (truncating for integers).
    #[inline]
    fn halve(self) -> Self {
        self / (Self::ONE + Self::ONE)
    }
}

macro_rules! impl_coordinate {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Coordinate for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_coordinate! {
    i32 => 0, 1;
    i64 => 0, 1;
    u32 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}
