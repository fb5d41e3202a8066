//! Ear scan state machine: Scan → (Finalize | Stalled).
//!
//! Input is the already-normalized (CCW or zero-area) backing array. Output
//! triangles are index triples into that array, in (prev, cur, next) order.
//!
//! Under `DegeneratePolicy::Skip` no zero-area triangle is emitted:
//! - a vertex with the same coordinates as its ring successor is unlinked
//!   without a triangle (join duplicates, repeated closing points);
//! - a ring whose every turn is flat (a collinear chain) is finished as
//!   `Complete`, since it covers no area.

use crate::cfg::{ConvexityTest, DegeneratePolicy, TriangulateCfg, AREA_EPS};
use crate::predicates::{interior_angle, is_convex, point_in_triangle};
use crate::types::{Point2, Triangle, TriangulationStatus};

use super::working::WorkingList;

/// One step of the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Ear([usize; 3]),
    /// Drop a vertex that coincides with its successor.
    Collapse(usize),
}

/// Clip ears until three vertices remain or a full pass finds none.
pub(crate) fn clip_ears(
    points: &[Point2],
    cfg: TriangulateCfg,
) -> (Vec<[usize; 3]>, TriangulationStatus) {
    let skip = cfg.degenerate == DegeneratePolicy::Skip;
    let mut ring = WorkingList::new(points.len());
    let mut out = Vec::with_capacity(points.len().saturating_sub(2));
    while ring.len() > 3 {
        match next_step(points, &ring, cfg) {
            Some(Step::Ear(ear)) => {
                out.push(ear);
                ring.remove(ear[1]);
            }
            Some(Step::Collapse(k)) => ring.remove(k),
            None if skip && is_flat(points, &ring) => {
                return (out, TriangulationStatus::Complete);
            }
            None => {
                return (
                    out,
                    TriangulationStatus::Stalled {
                        remaining: ring.len(),
                    },
                );
            }
        }
    }
    if !(skip && is_flat(points, &ring)) {
        let a = ring.head();
        let b = ring.next(a);
        let c = ring.next(b);
        out.push([a, b, c]);
    }
    (out, TriangulationStatus::Complete)
}

#[inline]
fn twice_area(p: Point2, c: Point2, n: Point2) -> f64 {
    2.0 * Triangle::new(p, c, n).area()
}

/// Every live vertex is a flat turn.
fn is_flat(points: &[Point2], ring: &WorkingList) -> bool {
    ring.iter().all(|cur| {
        let (p, n) = (ring.prev(cur), ring.next(cur));
        twice_area(points[p], points[cur], points[n]) <= AREA_EPS
    })
}

/// Next step: under `Skip` any coincident pair is collapsed first, otherwise
/// the first ear in ring order starting at the head.
fn next_step(points: &[Point2], ring: &WorkingList, cfg: TriangulateCfg) -> Option<Step> {
    if cfg.degenerate == DegeneratePolicy::Skip {
        if let Some(k) = ring.iter().find(|&k| points[k] == points[ring.next(k)]) {
            return Some(Step::Collapse(k));
        }
    }
    find_ear(points, ring, cfg).map(Step::Ear)
}

fn find_ear(points: &[Point2], ring: &WorkingList, cfg: TriangulateCfg) -> Option<[usize; 3]> {
    let skip = cfg.degenerate == DegeneratePolicy::Skip;
    ring.iter().find_map(|cur| {
        let prev = ring.prev(cur);
        let next = ring.next(cur);
        let (p, c, n) = (points[prev], points[cur], points[next]);
        let reflex = match cfg.convexity {
            ConvexityTest::TurningAngle => interior_angle(p, c, n) >= std::f64::consts::PI,
            ConvexityTest::Cross => !is_convex(p, c, n),
        };
        if reflex {
            return None;
        }
        if skip && twice_area(p, c, n) <= AREA_EPS {
            return None;
        }
        let tri = Triangle::new(p, c, n);
        let blocked = ring
            .iter()
            .filter(|&k| k != prev && k != cur && k != next)
            .any(|k| point_in_triangle(&tri, points[k]));
        (!blocked).then_some([prev, cur, next])
    })
}
