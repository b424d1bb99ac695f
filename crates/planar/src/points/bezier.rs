//! Cubic Bézier curves and a brute-force least-squares fit.
//!
//! Fit model
//! - End points are pinned to the first and last input points.
//! - Interior control points are searched on a coarse lattice over the (vertically
//!   stretched) bounding box of the input; the pair with the smallest
//!   `square_error` wins.
//! - The error walks the curve from its end to its start and charges each input
//!   point, right to left, against the first curve sample at or left of it. This
//!   assumes the curve is roughly monotone in x.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::areas::{Bounds, Size};
use crate::sequence::linspace;

use super::Point;

/// Default number of curve samples used by `square_error`.
pub const ERROR_SAMPLES: usize = 100;

/// Fitting parameters for `Bezier::fit`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitCfg {
    /// Candidate lattice side; `grid_side²` candidates per control point.
    pub grid_side: usize,
    /// Vertical stretch applied to the input's bounding box before sampling candidates.
    pub stretch: f64,
    /// Curve samples per error evaluation.
    pub error_samples: usize,
}

impl Default for FitCfg {
    fn default() -> Self {
        Self {
            grid_side: 5,
            stretch: 1.5,
            error_samples: ERROR_SAMPLES,
        }
    }
}

/// Cubic Bézier curve with control points `p1..p4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bezier {
    pub p1: Point<f64>,
    pub p2: Point<f64>,
    pub p3: Point<f64>,
    pub p4: Point<f64>,
}

impl Bezier {
    #[inline]
    pub fn new(p1: Point<f64>, p2: Point<f64>, p3: Point<f64>, p4: Point<f64>) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Fit a curve through `points` (ordered along the curve). `None` for fewer than two points.
    pub fn fit(points: &[Point<f64>], cfg: FitCfg) -> Option<Bezier> {
        let (&first, &last) = (points.first()?, points.last()?);
        if points.len() < 2 {
            return None;
        }
        let candidates = Bounds::enclose(points)?
            .scale_xy(Size::new(1.0, cfg.stretch))
            .sample(cfg.grid_side);

        let mut best = Bezier::new(first, first, last, last);
        let mut best_error = best.square_error_with(points, cfg.error_samples);
        for &p2 in &candidates {
            for &p3 in &candidates {
                let curve = Bezier::new(first, p2, p3, last);
                let error = curve.square_error_with(points, cfg.error_samples);
                if error < best_error {
                    best = curve;
                    best_error = error;
                }
            }
        }
        Some(best)
    }

    /// Evaluate at parameter `t ∈ [0, 1]` in the Bernstein basis.
    pub fn point(&self, t: f64) -> Point<f64> {
        let s = 1.0 - t;
        let b0 = s * s * s;
        let b1 = 3.0 * s * s * t;
        let b2 = 3.0 * s * t * t;
        let b3 = t * t * t;
        let cube = |q1: f64, q2: f64, q3: f64, q4: f64| q1 * b0 + q2 * b1 + q3 * b2 + q4 * b3;
        Point::new(
            cube(self.p1.x(), self.p2.x(), self.p3.x(), self.p4.x()),
            cube(self.p1.y(), self.p2.y(), self.p3.y(), self.p4.y()),
        )
    }

    /// `n` points at evenly spaced parameters over `[0, 1]`.
    pub fn sample(&self, n: usize) -> Vec<Point<f64>> {
        linspace(0.0, 1.0, n)
            .into_iter()
            .map(|t| self.point(t))
            .collect()
    }

    pub fn shift(&self, offset: Size<f64>) -> Bezier {
        self.transform(|p| p + offset)
    }

    /// Apply `map` to every control point.
    pub fn transform(&self, map: impl Fn(Point<f64>) -> Point<f64>) -> Bezier {
        Bezier::new(map(self.p1), map(self.p2), map(self.p3), map(self.p4))
    }

    pub fn square_error(&self, points: &[Point<f64>]) -> f64 {
        self.square_error_with(points, ERROR_SAMPLES)
    }

    /// Sum of squared vertical distances between `points` and the curve sampled `samples` times.
    pub fn square_error_with(&self, points: &[Point<f64>], samples: usize) -> f64 {
        let mut remaining = points.to_vec();
        remaining.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));

        let mut error = 0.0;
        for t in linspace(0.0, 1.0, samples) {
            let projection = self.point(1.0 - t);
            while let Some(last) = remaining.last() {
                if projection.x() > last.x() {
                    break;
                }
                error += (projection.y() - last.y()).powi(2);
                remaining.pop();
            }
        }
        error
    }
}

impl fmt::Display for Bezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.p1, self.p2, self.p3, self.p4)
    }
}
