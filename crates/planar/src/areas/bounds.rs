//! Axis-aligned rectangles and layout helpers.
//!
//! A `Bounds` is its top-left `point` plus a non-negative `size`. Layout helpers
//! (`tile`, `grid`, `rows`, `cols`) lay cells out row-major: left to right, then
//! top to bottom.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::error::PlanarError;
use crate::linear::Matrix;
use crate::points::{Point, Segment};
use crate::scalar::{Dimensions, Slice};
use crate::sequence::{linspace, product};

use super::Size;

/// Horizontal placement of a region inside a `Bounds`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Multiples of half the free width to move right by.
    #[inline]
    fn steps(self) -> f64 {
        match self {
            Alignment::Left => 0.0,
            Alignment::Center => 1.0,
            Alignment::Right => 2.0,
        }
    }
}

impl FromStr for Alignment {
    type Err = PlanarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" | "centre" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(PlanarError::UnknownAlignment { name: s.to_string() }),
        }
    }
}

/// Axis-aligned rectangle: top-left `point` and `size`.
///
/// Ordering is lexicographic: point first, then size.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Bounds {
    pub point: Point<f64>,
    pub size: Size<f64>,
}

impl Bounds {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            point: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn from_parts(point: Point<f64>, size: Size<f64>) -> Self {
        Self { point, size }
    }

    /// Smallest bounds containing every point. `None` for no points.
    pub fn enclose(points: &[Point<f64>]) -> Option<Bounds> {
        let first = points.first()?;
        let (mut lo, mut hi) = ((first.x(), first.y()), (first.x(), first.y()));
        for p in &points[1..] {
            lo = (lo.0.min(p.x()), lo.1.min(p.y()));
            hi = (hi.0.max(p.x()), hi.1.max(p.y()));
        }
        Some(Bounds::new(lo.0, lo.1, span(lo.0, hi.0), span(lo.1, hi.1)))
    }

    /// Smallest bounds containing every member. `None` for no members.
    pub fn union(bounds: &[Bounds]) -> Option<Bounds> {
        let corners: Vec<Point<f64>> = bounds
            .iter()
            .flat_map(|b| [b.point, b.far()])
            .collect();
        Bounds::enclose(&corners)
    }

    /// From the first cell's corner to the last cell's far corner.
    pub fn from_matrix(cells: &Matrix<Bounds>) -> Option<Bounds> {
        if cells.is_empty() {
            return None;
        }
        let limits = cells.size();
        let first = cells.get(Point::new(0, 0))?;
        let last = cells.get(Point::new(limits.cols - 1, limits.rows - 1))?;
        let far = last.far();
        Some(Bounds::new(
            first.point.x(),
            first.point.y(),
            far.x() - first.point.x(),
            far.y() - first.point.y(),
        ))
    }

    /// Bottom-right corner.
    #[inline]
    pub fn far(&self) -> Point<f64> {
        self.point + self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point<f64>; 4] {
        let (w, h) = (self.size.width(), self.size.height());
        [
            self.point,
            self.point + Size::new(w, 0.0),
            self.point + Size::new(0.0, h),
            self.point + self.size,
        ]
    }

    /// Edge midpoints: top, left, right, bottom.
    pub fn midpoints(&self) -> [Point<f64>; 4] {
        let (w, h) = (self.size.width(), self.size.height());
        [
            self.point + Size::new(w / 2.0, 0.0),
            self.point + Size::new(0.0, h / 2.0),
            self.point + Size::new(w, h / 2.0),
            self.point + Size::new(w / 2.0, h),
        ]
    }

    /// Edges: top, left, right, bottom.
    pub fn segments(&self) -> [Segment<f64>; 4] {
        let [tl, tr, bl, br] = self.corners();
        [
            Segment::new(tl, tr),
            Segment::new(tl, bl),
            Segment::new(tr, br),
            Segment::new(bl, br),
        ]
    }

    /// Edges count as inside.
    pub fn contains(&self, p: Point<f64>) -> bool {
        let far = self.far();
        self.point.x() <= p.x() && p.x() <= far.x() && self.point.y() <= p.y() && p.y() <= far.y()
    }

    /// Closed-interval overlap on both axes; touching edges overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let (a, b) = (self.far(), other.far());
        self.point.x() <= b.x()
            && other.point.x() <= a.x()
            && self.point.y() <= b.y()
            && other.point.y() <= a.y()
    }

    #[inline]
    pub fn center(&self) -> Point<f64> {
        self.point + self.size / 2.0
    }

    /// A region of `size` centred inside these bounds.
    #[inline]
    pub fn centered(&self, size: Size<f64>) -> Bounds {
        self.align(size, Alignment::Center)
    }

    /// Same size, moved to the origin.
    #[inline]
    pub fn rebase(&self) -> Bounds {
        Bounds::from_parts(Point::default(), self.size)
    }

    #[inline]
    pub fn shift(&self, offset: Size<f64>) -> Bounds {
        Bounds::from_parts(self.point + offset, self.size)
    }

    /// Shrink by `border` in total, keeping the centre.
    #[inline]
    pub fn pad(&self, border: Size<f64>) -> Bounds {
        Bounds::from_parts(self.point + border / 2.0, self.size - border)
    }

    /// Largest centred region with the aspect ratio of `limits` that fits, or
    /// `limits` itself when it already fits.
    pub fn constrain(&self, limits: Size<f64>) -> Bounds {
        let (w, h) = (limits.width(), limits.height());
        let (big_w, big_h) = (self.size.width(), self.size.height());

        if w <= big_w && h <= big_h {
            return self.centered(limits);
        }

        let narrow = Size::new(big_h * w / h, big_h);
        let wide = Size::new(big_w, big_w * h / w);

        if big_h * w / h < w && big_h < h {
            self.centered(narrow)
        } else {
            self.centered(wide)
        }
    }

    /// Region of `size`, vertically centred and placed horizontally by `alignment`.
    pub fn align(&self, size: Size<f64>, alignment: Alignment) -> Bounds {
        let (w, h) = (size.width(), size.height());
        Bounds::new(
            self.point.x() + alignment.steps() * (self.size.width() - w) / 2.0,
            self.point.y() + (self.size.height() - h) / 2.0,
            w,
            h,
        )
    }

    /// Uniform scale about the centre.
    #[inline]
    pub fn scale(&self, factor: f64) -> Bounds {
        self.scale_xy(Size::new(factor, factor))
    }

    #[inline]
    pub fn scale_xy(&self, factor: Size<f64>) -> Bounds {
        self.scale_about_xy(factor, self.center())
    }

    #[inline]
    pub fn scale_about(&self, factor: f64, origin: Point<f64>) -> Bounds {
        self.scale_about_xy(Size::new(factor, factor), origin)
    }

    /// Scale per axis keeping `origin` fixed.
    pub fn scale_about_xy(&self, factor: Size<f64>, origin: Point<f64>) -> Bounds {
        let (fx, fy) = (factor.width(), factor.height());
        let x = fx * self.point.x() + (1.0 - fx) * origin.x();
        let y = fy * self.point.y() + (1.0 - fy) * origin.y();
        Bounds::from_parts(Point::new(x, y), self.size.scale_xy(factor))
    }

    /// Bounds of the cells `rows × cols` of `grid(dimensions)`.
    pub fn slice(
        &self,
        dimensions: Dimensions,
        rows: Slice,
        cols: Slice,
    ) -> Result<Bounds, PlanarError> {
        let cells = self
            .grid(dimensions, Size::default(), Size::default())
            .slice(rows, cols)?;
        Bounds::from_matrix(&cells).ok_or(PlanarError::EmptySelection)
    }

    /// Split at `x` from the left edge into (left, right).
    pub fn split_width(&self, x: f64) -> (Bounds, Bounds) {
        let cut = Size::new(x, 0.0);
        (
            Bounds::from_parts(self.point, Size::new(x, self.size.height())),
            Bounds::from_parts(self.point + cut, self.size - cut),
        )
    }

    /// Split at `y` from the top edge into (top, bottom).
    pub fn split_height(&self, y: f64) -> (Bounds, Bounds) {
        let cut = Size::new(0.0, y);
        (
            Bounds::from_parts(self.point, Size::new(self.size.width(), y)),
            Bounds::from_parts(self.point + cut, self.size - cut),
        )
    }

    /// `side × side` lattice from corner to corner, x-major; a single sample is the centre.
    pub fn sample(&self, side: usize) -> Vec<Point<f64>> {
        if side == 1 {
            return vec![self.center()];
        }
        let far = self.far();
        product(
            &linspace(self.point.x(), far.x(), side),
            &linspace(self.point.y(), far.y(), side),
            Point::new,
        )
    }

    /// `n` horizontal strips, top to bottom.
    pub fn rows(&self, n: usize) -> Vec<Bounds> {
        if n == 0 {
            return Vec::new();
        }
        let strip = Size::new(self.size.width(), self.size.height() / n as f64);
        (0..n)
            .map(|i| {
                let top = Point::new(self.point.x(), self.point.y() + strip.height() * i as f64);
                Bounds::from_parts(top, strip)
            })
            .collect()
    }

    /// `n` vertical strips, left to right.
    pub fn cols(&self, n: usize) -> Vec<Bounds> {
        if n == 0 {
            return Vec::new();
        }
        let strip = Size::new(self.size.width() / n as f64, self.size.height());
        (0..n)
            .map(|i| {
                let left = Point::new(self.point.x() + strip.width() * i as f64, self.point.y());
                Bounds::from_parts(left, strip)
            })
            .collect()
    }

    /// Copies of these bounds stepped by `size + padding`, starting here.
    pub fn tile(&self, dimensions: Dimensions, padding: Size<f64>) -> Matrix<Bounds> {
        let step = self.size + padding;
        Matrix::from_fn(dimensions, |row, col| {
            let corner = Point::new(
                self.point.x() + step.width() * col as f64,
                self.point.y() + step.height() * row as f64,
            );
            Bounds::from_parts(corner, self.size)
        })
    }

    /// Divide into `dimensions` cells. `margin` surrounds the whole grid and
    /// `padding` surrounds each cell.
    pub fn grid(
        &self,
        dimensions: Dimensions,
        padding: Size<f64>,
        margin: Size<f64>,
    ) -> Matrix<Bounds> {
        if dimensions.is_empty() {
            return Matrix::default();
        }
        let rows = dimensions.rows as f64;
        let cols = dimensions.cols as f64;

        let cell = Size::new(
            (self.size.width() - 2.0 * margin.width()) / cols - 2.0 * padding.width(),
            (self.size.height() - 2.0 * margin.height()) / rows - 2.0 * padding.height(),
        );

        Bounds::from_parts(self.point + padding + margin, cell).tile(dimensions, padding * 2.0)
    }
}

/// Smallest extent with `lo + extent >= hi`; `hi - lo` alone can round one ulp short.
fn span(lo: f64, hi: f64) -> f64 {
    let mut extent = hi - lo;
    while extent >= 0.0 && lo + extent < hi {
        extent = f64::from_bits(extent.to_bits() + 1);
    }
    extent
}

impl Add<Size<f64>> for Bounds {
    type Output = Bounds;
    #[inline]
    fn add(self, rhs: Size<f64>) -> Self::Output {
        Bounds::from_parts(self.point, self.size + rhs)
    }
}

impl Sub<Size<f64>> for Bounds {
    type Output = Bounds;
    #[inline]
    fn sub(self, rhs: Size<f64>) -> Self::Output {
        Bounds::from_parts(self.point, self.size - rhs)
    }
}

impl Mul<f64> for Bounds {
    type Output = Bounds;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Bounds::from_parts(self.point, self.size * rhs)
    }
}

impl Div<f64> for Bounds {
    type Output = Bounds;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Bounds::from_parts(self.point, self.size / rhs)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.point, self.size)
    }
}
