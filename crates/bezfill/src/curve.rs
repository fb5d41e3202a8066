//! Quadratic Bézier sampling and contour assembly.
//!
//! Purpose
//! - Flatten quadratic segments with a fixed parameter step and stitch the
//!   resulting polylines into one closed contour for the triangulator.
//!
//! Assumptions and conventions
//! - Sampling is uniform in `t`; highly curved segments may be under-sampled.
//!   No adaptive subdivision.
//! - A contour never repeats its first point at the end; the closing edge is
//!   implied.
//! - Joins are kept verbatim unless `merge_joins` is set: consecutive pieces
//!   that share an endpoint then produce the shared point once.

use crate::types::{Point2, QuadBezier};

/// Sample `n + 1` points at `t = i / n`, `i = 0..=n`.
///
/// `n = 0` yields `[p0]` (only `t = 0` is evaluated).
pub fn sample_quadratic(p0: Point2, p1: Point2, p2: Point2, n: usize) -> Vec<Point2> {
    QuadBezier::new(p0, p1, p2).sample(n)
}

impl QuadBezier {
    /// Uniform flattening; see [`sample_quadratic`].
    pub fn sample(&self, n: usize) -> Vec<Point2> {
        if n == 0 {
            return vec![self.p0];
        }
        let step = n as f64;
        (0..=n).map(|i| self.eval(i as f64 / step)).collect()
    }
}

/// Builds one closed contour from curve and polyline pieces.
///
/// ```
/// use bezfill::{ContourBuilder, QuadBezier};
/// use nalgebra::vector;
///
/// let top = QuadBezier::new(vector![-1.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]);
/// let contour = ContourBuilder::new()
///     .curve(top, 8)
///     .points([vector![0.0, -1.0]])
///     .build();
/// assert_eq!(contour.len(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContourBuilder {
    points: Vec<Point2>,
    merge_joins: bool,
}

impl ContourBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop exact duplicates at piece joins and at the closing edge.
    pub fn merge_joins(mut self, yes: bool) -> Self {
        self.merge_joins = yes;
        self
    }

    /// Append `seg` sampled with `n` steps, `p0` first.
    pub fn curve(self, seg: QuadBezier, n: usize) -> Self {
        self.points(seg.sample(n))
    }

    /// Append `seg` sampled with `n` steps, `p2` first.
    ///
    /// Equivalent to sampling and reversing the list, which keeps the sampled
    /// positions identical to the forward direction.
    pub fn curve_reversed(self, seg: QuadBezier, n: usize) -> Self {
        let mut pts = seg.sample(n);
        pts.reverse();
        self.points(pts)
    }

    /// Append raw points (straight polyline piece).
    pub fn points<I: IntoIterator<Item = Point2>>(mut self, pts: I) -> Self {
        let mut iter = pts.into_iter().peekable();
        if self.merge_joins {
            if let (Some(last), Some(first)) = (self.points.last(), iter.peek()) {
                if last == first {
                    iter.next();
                }
            }
        }
        self.points.extend(iter);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finish the contour.
    pub fn build(mut self) -> Vec<Point2> {
        if self.merge_joins && self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
        }
        self.points
    }
}
