use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::points::Point;

/// Horizontal flip followed by a counter-clockwise rotation (radians).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    #[serde(default)]
    pub flip: bool,
    #[serde(default)]
    pub rotation: f64,
}

impl Transformation {
    #[inline]
    pub fn new(flip: bool, rotation: f64) -> Self {
        Self { flip, rotation }
    }

    /// True when applying the transformation changes nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.flip && self.rotation == 0.0
    }

    /// Map `point` about `origin`: mirror across the vertical line through
    /// `origin` when flipped, then rotate by `rotation` around `origin`.
    pub fn apply(&self, point: Point<f64>, origin: Point<f64>) -> Point<f64> {
        if self.is_empty() {
            return point;
        }
        let mirrored = if self.flip {
            point.flip_x(origin.x())
        } else {
            point
        };
        let offset = Vector2::new(mirrored.x() - origin.x(), mirrored.y() - origin.y());
        let turned = Rotation2::new(self.rotation) * offset;
        Point::new(origin.x() + turned.x, origin.y() + turned.y)
    }
}
