//! Ear-clipping triangulation of one simple, hole-free contour.
//!
//! Purpose
//! - Turn a flattened outline (tens to a few hundred points) into a triangle
//!   list a renderer can upload as-is.
//!
//! Pipeline
//! - Validate (≥ 3 finite points) → copy and normalize winding to CCW →
//!   repeatedly clip the first ear found from the head of the ring → push the
//!   last three vertices.
//! - O(n²): each ear search walks the ring and tests every live vertex.
//!
//! Failure policy
//! - Only precondition violations are errors. If a full pass finds no ear
//!   (self-intersecting input), the triangles found so far are returned with
//!   `TriangulationStatus::Stalled` and the leftover vertices are dropped.
//! - With `DegeneratePolicy::Skip`, repeated points are unlinked and a
//!   leftover collinear chain counts as done, so contours with duplicated
//!   joins or straight runs still finish `Complete`.
//!
//! Code cross-refs: `winding::normalize`, `predicates`, `cfg::TriangulateCfg`.

mod clip;
mod working;

use crate::cfg::TriangulateCfg;
use crate::error::TriangulateError;
use crate::types::{Point2, Triangle, Triangulation, TriangulationStatus};
use crate::winding;

/// Triangulate with the default options (cross-product convexity, skip degenerate ears).
pub fn triangulate(points: &[Point2]) -> Result<Triangulation, TriangulateError> {
    triangulate_with(points, TriangulateCfg::default())
}

/// Triangulate `points` (closed contour, no repeated closing point).
///
/// The input is never mutated. `Triangulation::indices` refer to `points`.
pub fn triangulate_with(
    points: &[Point2],
    cfg: TriangulateCfg,
) -> Result<Triangulation, TriangulateError> {
    let n = points.len();
    if n < 3 {
        return Err(TriangulateError::TooFewPoints { len: n });
    }
    if let Some(index) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(TriangulateError::NonFinite { index });
    }

    let mut work = points.to_vec();
    let reversed = winding::normalize(&mut work);
    let (local, status) = clip::clip_ears(&work, cfg);

    let to_input = |k: usize| if reversed { n - 1 - k } else { k };
    let triangles = local
        .iter()
        .map(|&[a, b, c]| Triangle::new(work[a], work[b], work[c]))
        .collect();
    let indices = local
        .iter()
        .map(|&[a, b, c]| [to_input(a), to_input(b), to_input(c)])
        .collect();

    match status {
        TriangulationStatus::Complete => {
            tracing::debug!(vertices = n, triangles = local.len(), reversed, "triangulated");
        }
        TriangulationStatus::Stalled { remaining } => {
            tracing::warn!(
                vertices = n,
                triangles = local.len(),
                remaining,
                "no ear found; returning partial triangulation"
            );
        }
    }

    Ok(Triangulation {
        triangles,
        indices,
        status,
        reversed,
    })
}
