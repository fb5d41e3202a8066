//! Curated API surface.
//!
//! Prefer these re-exports over deep module paths; internal layout may change.

// Sampling and contour assembly
pub use crate::curve::{sample_quadratic, ContourBuilder};
pub use crate::types::{Point2, QuadBezier};
// Winding
pub use crate::winding::{normalize, normalized, orientation, signed_area, Winding};
// Predicates
pub use crate::predicates::{
    any_point_inside, barycentric, interior_angle, is_convex, point_in_triangle,
};
// Triangulation
pub use crate::cfg::{ConvexityTest, DegeneratePolicy, TriangulateCfg, AREA_EPS};
pub use crate::error::TriangulateError;
pub use crate::triangulate::{triangulate, triangulate_with};
pub use crate::types::{Triangle, Triangulation, TriangulationStatus};
// Random test polygons
pub use crate::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
