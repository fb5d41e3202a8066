//! Geometric predicates used by the ear scan.
//!
//! - `interior_angle`: unsigned turning angle at a vertex, in `[0, π]`.
//! - `is_convex`: signed cross-product convexity for CCW input.
//! - `barycentric` / `point_in_triangle`: strict containment (boundary is outside).
//! - `any_point_inside`: containment over a candidate set.
//!
//! Degenerate triangles (|2·area| <= `AREA_EPS`) contain nothing; there is no
//! NaN path through these functions.

use std::f64::consts::PI;

use crate::cfg::AREA_EPS;
use crate::types::{Point2, Triangle};

#[inline]
fn cross(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Angle between `cur − prev` and `next − cur`, in radians.
///
/// Measures how far the path turns at `cur`, not a signed interior angle:
/// a left and a right turn of the same magnitude give the same value. The
/// `acos` argument is clamped to `[-1, 1]`. A zero-length edge gives `0.0`.
pub fn interior_angle(prev: Point2, cur: Point2, next: Point2) -> f64 {
    let a = cur - prev;
    let b = next - cur;
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    let c = (a.dot(&b) / denom).clamp(-1.0, 1.0);
    let theta = c.acos();
    debug_assert!((0.0..=PI).contains(&theta));
    theta
}

/// `true` iff the path turns left at `cur` (strictly convex on a CCW contour).
#[inline]
pub fn is_convex(prev: Point2, cur: Point2, next: Point2) -> bool {
    cross(cur - prev, next - cur) > 0.0
}

/// Barycentric weights `(s, t, u)` of `p` with `s + t + u = 1`.
///
/// `s` weighs `vertices[1]`, `t` weighs `vertices[2]`, `u` weighs
/// `vertices[0]`. Returns `None` for a degenerate triangle.
pub fn barycentric(tri: &Triangle, p: Point2) -> Option<(f64, f64, f64)> {
    let [a, b, c] = tri.vertices;
    let ab = b - a;
    let ac = c - a;
    let twice_area = cross(ab, ac);
    if twice_area.abs() <= AREA_EPS {
        return None;
    }
    let ap = p - a;
    let s = cross(ap, ac) / twice_area;
    let t = cross(ab, ap) / twice_area;
    Some((s, t, 1.0 - s - t))
}

/// Strict containment: points on an edge or vertex are outside.
pub fn point_in_triangle(tri: &Triangle, p: Point2) -> bool {
    match barycentric(tri, p) {
        Some((s, t, u)) => s > 0.0 && t > 0.0 && u > 0.0,
        None => false,
    }
}

/// `true` if some candidate other than the triangle's own corners lies strictly inside.
///
/// Candidates equal in coordinates to a corner are skipped; strict
/// containment would reject them anyway.
pub fn any_point_inside<'a, I>(tri: &Triangle, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a Point2>,
{
    candidates
        .into_iter()
        .filter(|p| !tri.vertices.contains(p))
        .any(|p| point_in_triangle(tri, *p))
}
