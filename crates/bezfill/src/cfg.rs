//! Tolerances and triangulation options.
//!
//! Policy
//! - Tolerances are fixed constants to avoid "tolerance juggling" in the
//!   predicates. Adjusting them is rare.
//! - Behavioural switches live in `TriangulateCfg` so callers can opt into the
//!   legacy ear test when they need output that matches older renders.

/// Twice-area threshold below which a triangle counts as degenerate.
///
/// Scale-agnostic like the other epsilons; callers should keep coordinates
/// roughly O(1) (normalized device coordinates are the typical input).
pub const AREA_EPS: f64 = 1e-12;

/// Which test excludes reflex vertices from the ear scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConvexityTest {
    /// Legacy test: skip when the unsigned turning angle is `>= π`.
    /// The angle is an `acos` result and never exceeds π, so in practice this
    /// only skips exact reversals and ear choice rests on the containment test.
    TurningAngle,
    /// Skip unless `(cur − prev) × (next − cur) > 0` on the CCW working list.
    #[default]
    Cross,
}

/// What to do with a zero-area candidate ear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Not an ear; keep scanning. A vertex coinciding with its neighbour is
    /// unlinked without a triangle, and a leftover collinear chain ends the
    /// scan as complete.
    #[default]
    Skip,
    /// Clip it anyway (emits a zero-area triangle). This is how older
    /// renders swallowed duplicated points where curve pieces join.
    Accept,
}

/// Ear-clipping options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriangulateCfg {
    pub convexity: ConvexityTest,
    pub degenerate: DegeneratePolicy,
}

impl TriangulateCfg {
    /// Options matching older renders, except where rounding pushes the
    /// `acos` argument of `interior_angle` past `-1`: the clamped angle is π
    /// and the vertex is skipped, where older renders got NaN and clipped it.
    pub fn legacy() -> Self {
        Self {
            convexity: ConvexityTest::TurningAngle,
            degenerate: DegeneratePolicy::Accept,
        }
    }
}
