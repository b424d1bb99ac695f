use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coordinate::Coordinate;

use super::Point;

/// Straight line segment from `start` to `end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment<T> {
    pub start: Point<T>,
    pub end: Point<T>,
}

impl<T> Segment<T> {
    #[inline]
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Self { start, end }
    }
}

impl<T: Coordinate> Segment<T> {
    #[inline]
    pub fn midpoint(&self) -> Point<T> {
        Point::new(
            (self.start.x() + self.end.x()).halve(),
            (self.start.y() + self.end.y()).halve(),
        )
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl<T: fmt::Display> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{start: {}, end: {}}}", self.start, self.end)
    }
}
