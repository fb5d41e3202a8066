//! Quadratic Bézier flattening and ear-clipping triangulation.
//!
//! Pipeline
//! - `curve`: sample control triples into point sequences and stitch pieces
//!   into one closed contour (`ContourBuilder`).
//! - `winding`: shoelace signed area; normalize contours to CCW.
//! - `predicates`: turning angle, convexity, strict point-in-triangle.
//! - `triangulate`: ear clipping over an index ring; partial results are
//!   reported through `TriangulationStatus` instead of being dropped silently.
//!
//! Rendering is not part of this crate: the output is a plain triangle list
//! (points by value, plus index triples into the caller's input).
//!
//! API Policy
//! - `api` is the curated surface; module paths may move between versions.

pub mod api;
pub mod cfg;
pub mod curve;
pub mod error;
pub mod predicates;
pub mod rand;
pub mod triangulate;
pub mod types;
pub mod winding;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{ConvexityTest, DegeneratePolicy, TriangulateCfg};
pub use curve::{sample_quadratic, ContourBuilder};
pub use error::TriangulateError;
pub use triangulate::{triangulate, triangulate_with};
pub use types::{Point2, QuadBezier, Triangle, Triangulation, TriangulationStatus};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{ConvexityTest, DegeneratePolicy, TriangulateCfg};
    pub use crate::curve::{sample_quadratic, ContourBuilder};
    pub use crate::triangulate::{triangulate, triangulate_with};
    pub use crate::types::{Point2, QuadBezier, Triangle, Triangulation, TriangulationStatus};
    pub use crate::winding::{normalize, signed_area};
    pub use nalgebra::{vector, Vector2 as Vec2};
}
