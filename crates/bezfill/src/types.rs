//! Value types shared by the sampler, the winding pass, and the triangulator.
//!
//! - `Point2`: a finite 2D point (nalgebra column vector).
//! - `QuadBezier`: three control points of one quadratic segment.
//! - `Triangle`: three points in (prev, cur, next) order as clipped.
//! - `Triangulation`: triangle list plus index list and completion status.

use nalgebra::{Matrix2, Vector2};

/// 2D point. Finite coordinates are assumed everywhere in this crate.
pub type Point2 = Vector2<f64>;

/// Quadratic Bézier segment `P(t) = (1−t)² p0 + 2(1−t)t p1 + t² p2`, `t ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
}

impl QuadBezier {
    #[inline]
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluate the curve at `t` (expected in `[0, 1]`, not clamped).
    #[inline]
    pub fn eval(&self, t: f64) -> Point2 {
        let one_t = 1.0 - t;
        let b0 = one_t * one_t;
        let b1 = 2.0 * one_t * t;
        let b2 = t * t;
        Vector2::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y,
        )
    }

    /// Same segment traversed from `p2` to `p0`.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p2,
            p1: self.p1,
            p2: self.p0,
        }
    }
}

/// One output triangle, vertices copied by value in (prev, cur, next) order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point2; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Signed area; positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        // determinant of [b-a c-a]
        Matrix2::from_columns(&[b - a, c - a]).determinant() * 0.5
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Flat `[x0, y0, x1, y1, x2, y2]` layout, the shape vertex buffers want.
    pub fn flat(&self) -> [f64; 6] {
        let [a, b, c] = self.vertices;
        [a.x, a.y, b.x, b.y, c.x, c.y]
    }
}

/// How a triangulation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangulationStatus {
    /// Every vertex was consumed; the last three formed the final triangle.
    Complete,
    /// A full scan found no ear while `remaining >= 4` vertices were left.
    /// Triangles found before the stall are kept; the rest is dropped.
    Stalled { remaining: usize },
}

/// Result of ear clipping.
///
/// Invariants:
/// - `triangles[k]` and `indices[k]` describe the same triangle.
/// - `indices` refer to positions in the caller's input slice (not the
///   normalized working copy), so they can feed an index buffer directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation {
    pub triangles: Vec<Triangle>,
    pub indices: Vec<[usize; 3]>,
    pub status: TriangulationStatus,
    /// Whether winding normalization reversed the working copy.
    pub reversed: bool,
}

impl Triangulation {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == TriangulationStatus::Complete
    }

    /// Sum of unsigned triangle areas.
    pub fn total_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn eval_hits_endpoints_and_midpoint() {
        let q = QuadBezier::new(vector![0.0, 0.0], vector![1.0, 2.0], vector![2.0, 0.0]);
        assert_eq!(q.eval(0.0), q.p0);
        assert_eq!(q.eval(1.0), q.p2);
        // B(1/2) = p0/4 + p1/2 + p2/4
        let mid = q.eval(0.5);
        assert!((mid - vector![1.0, 1.0]).norm() < 1e-12);
    }

    #[test]
    fn reversed_traverses_backwards() {
        let q = QuadBezier::new(vector![-1.0, 0.0], vector![0.3, 0.8], vector![2.0, -0.5]);
        let r = q.reversed();
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            assert!((q.eval(t) - r.eval(1.0 - t)).norm() < 1e-12);
        }
    }

    #[test]
    fn triangle_area_sign_follows_orientation() {
        let t = Triangle::new(vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]);
        assert!((t.signed_area() - 0.5).abs() < 1e-12);
        let cw = Triangle::new(vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]);
        assert!((cw.signed_area() + 0.5).abs() < 1e-12);
        assert!((cw.area() - 0.5).abs() < 1e-12);
        assert_eq!(t.flat(), [0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    }
}
