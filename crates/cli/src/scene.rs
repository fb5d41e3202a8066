//! Scene files: named, colored outlines built from Bézier and polyline pieces.
//!
//! A scene is the hand-off format between whoever authors shapes and the
//! renderer: each shape is flattened into one contour, triangulated, and
//! written out as a flat colored triangle list.

use anyhow::{Context, Result};
use bezfill::{ContourBuilder, Point2, QuadBezier, Triangulation, TriangulateCfg};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

fn default_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_samples() -> usize {
    100
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Shape {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: [f32; 4],
    /// Drop duplicated points where pieces meet.
    #[serde(default)]
    pub merge_joins: bool,
    pub pieces: Vec<Piece>,
}

/// One stretch of a contour.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Piece {
    Quad {
        p0: [f64; 2],
        p1: [f64; 2],
        p2: [f64; 2],
        #[serde(default = "default_samples")]
        samples: usize,
    },
    /// Same curve, emitted from `p2` back to `p0`.
    QuadReversed {
        p0: [f64; 2],
        p1: [f64; 2],
        p2: [f64; 2],
        #[serde(default = "default_samples")]
        samples: usize,
    },
    Line {
        points: Vec<[f64; 2]>,
    },
}

#[inline]
fn pt(p: [f64; 2]) -> Point2 {
    Vector2::new(p[0], p[1])
}

fn quad(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2]) -> QuadBezier {
    QuadBezier::new(pt(p0), pt(p1), pt(p2))
}

impl Shape {
    /// Flatten all pieces into one closed contour.
    pub fn contour(&self) -> Vec<Point2> {
        let mut b = ContourBuilder::new().merge_joins(self.merge_joins);
        for piece in &self.pieces {
            b = match piece {
                Piece::Quad {
                    p0,
                    p1,
                    p2,
                    samples,
                } => b.curve(quad(*p0, *p1, *p2), *samples),
                Piece::QuadReversed {
                    p0,
                    p1,
                    p2,
                    samples,
                } => b.curve_reversed(quad(*p0, *p1, *p2), *samples),
                Piece::Line { points } => b.points(points.iter().copied().map(pt)),
            };
        }
        b.build()
    }
}

/// Renderer-facing output for one shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShapeMesh {
    pub name: String,
    pub color: [f32; 4],
    pub complete: bool,
    /// Vertices left untriangulated when the scan stalled.
    pub remaining: usize,
    pub triangles: Vec<[[f64; 2]; 3]>,
}

impl ShapeMesh {
    fn new(shape: &Shape, tri: &Triangulation) -> Self {
        let remaining = match tri.status {
            bezfill::TriangulationStatus::Complete => 0,
            bezfill::TriangulationStatus::Stalled { remaining } => remaining,
        };
        Self {
            name: shape.name.clone(),
            color: shape.color,
            complete: tri.is_complete(),
            remaining,
            triangles: tri
                .triangles
                .iter()
                .map(|t| t.vertices.map(|v| [v.x, v.y]))
                .collect(),
        }
    }
}

/// Flatten and triangulate every shape, in scene order.
pub fn tessellate(scene: &Scene, cfg: TriangulateCfg) -> Result<Vec<ShapeMesh>> {
    scene
        .shapes
        .iter()
        .map(|shape| {
            let contour = shape.contour();
            let tri = bezfill::triangulate_with(&contour, cfg)
                .with_context(|| format!("triangulating shape {:?}", shape.name))?;
            tracing::info!(
                shape = %shape.name,
                vertices = contour.len(),
                triangles = tri.triangles.len(),
                complete = tri.is_complete(),
                "shape"
            );
            Ok(ShapeMesh::new(shape, &tri))
        })
        .collect()
}

pub fn load(path: &str) -> Result<Scene> {
    let bytes = std::fs::read(path).with_context(|| format!("reading scene {path}"))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {path}"))
}

/// Built-in demo: an umbrella (shaft, tip, scalloped fabric, hooked handle).
pub fn umbrella() -> Scene {
    let shaft = Shape {
        name: "shaft".into(),
        color: BLUE,
        merge_joins: false,
        pieces: vec![Piece::Line {
            points: vec![[0.0, 0.5], [0.1, 0.5], [0.1, -0.7], [0.0, -0.7]],
        }],
    };
    let tip = Shape {
        name: "tip".into(),
        color: BLUE,
        merge_joins: true,
        pieces: vec![Piece::Quad {
            p0: [0.0, 0.5],
            p1: [0.05, 0.55],
            p2: [0.1, 0.5],
            samples: 100,
        }],
    };
    let fabric = Shape {
        name: "fabric".into(),
        color: YELLOW,
        merge_joins: true,
        pieces: vec![
            Piece::QuadReversed {
                p0: [0.3, 0.0],
                p1: [0.55, 0.2],
                p2: [0.8, 0.0],
                samples: 100,
            },
            Piece::QuadReversed {
                p0: [-0.2, 0.0],
                p1: [0.05, 0.2],
                p2: [0.3, 0.0],
                samples: 100,
            },
            Piece::QuadReversed {
                p0: [-0.7, 0.0],
                p1: [-0.45, 0.2],
                p2: [-0.2, 0.0],
                samples: 100,
            },
            Piece::Quad {
                p0: [-0.7, 0.0],
                p1: [0.05, 0.8],
                p2: [0.8, 0.0],
                samples: 100,
            },
        ],
    };
    // Inner arc left to right, outer arc right to left; the two straight
    // connectors are the implied edges between them.
    let handle = Shape {
        name: "handle".into(),
        color: BLUE,
        merge_joins: true,
        pieces: vec![
            Piece::Quad {
                p0: [-0.2, -0.7],
                p1: [-0.1, -0.8],
                p2: [0.0, -0.7],
                samples: 100,
            },
            Piece::QuadReversed {
                p0: [-0.3, -0.7],
                p1: [-0.1, -1.0],
                p2: [0.1, -0.7],
                samples: 100,
            },
        ],
    };
    Scene {
        shapes: vec![shaft, tip, fabric, handle],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umbrella_contours_have_expected_sizes() {
        let scene = umbrella();
        let lens: Vec<usize> = scene.shapes.iter().map(|s| s.contour().len()).collect();
        // fabric: 4 × 101 points, 3 joins and the closing point merged
        assert_eq!(lens, vec![4, 101, 400, 202]);
    }

    #[test]
    fn umbrella_triangulates_completely() {
        let scene = umbrella();
        let meshes = tessellate(&scene, TriangulateCfg::default()).unwrap();
        assert_eq!(meshes.len(), 4);
        for (shape, mesh) in scene.shapes.iter().zip(&meshes) {
            assert!(mesh.complete, "{} stalled", mesh.name);
            assert_eq!(mesh.remaining, 0);
            assert_eq!(mesh.triangles.len(), shape.contour().len() - 2);
        }
        assert_eq!(meshes[2].color, YELLOW);
    }

    #[test]
    fn unmerged_fabric_triangulates_completely() {
        let mut fabric = umbrella().shapes.swap_remove(2);
        let merged = tessellate(
            &Scene {
                shapes: vec![fabric.clone()],
            },
            TriangulateCfg::default(),
        )
        .unwrap();
        fabric.merge_joins = false;
        assert_eq!(fabric.contour().len(), 404);
        let scene = Scene {
            shapes: vec![fabric],
        };
        let meshes = tessellate(&scene, TriangulateCfg::default()).unwrap();
        assert!(meshes[0].complete, "{} left", meshes[0].remaining);
        assert_eq!(meshes[0].triangles.len(), 398);

        let area = |m: &ShapeMesh| -> f64 {
            m.triangles
                .iter()
                .map(|t| {
                    let [a, b, c] = t.map(|v| Vector2::new(v[0], v[1]));
                    bezfill::Triangle::new(a, b, c).area()
                })
                .sum()
        };
        assert!((area(&meshes[0]) - area(&merged[0])).abs() < 1e-12);
    }

    #[test]
    fn scene_json_defaults() {
        let src = r#"{
            "shapes": [{
                "name": "lens",
                "merge_joins": true,
                "pieces": [
                    {"kind": "quad", "p0": [-1, 0], "p1": [0, 1], "p2": [1, 0], "samples": 8},
                    {"kind": "quad_reversed", "p0": [-1, 0], "p1": [0, -1], "p2": [1, 0], "samples": 8}
                ]
            }, {
                "name": "tri",
                "pieces": [{"kind": "line", "points": [[0, 0], [1, 0], [0, 1]]}]
            }]
        }"#;
        let scene: Scene = serde_json::from_str(src).unwrap();
        assert_eq!(scene.shapes[0].color, default_color());
        assert_eq!(scene.shapes[0].contour().len(), 16);
        assert!(!scene.shapes[1].merge_joins);
        let meshes = tessellate(&scene, TriangulateCfg::default()).unwrap();
        assert_eq!(meshes[0].triangles.len(), 14);
        assert_eq!(meshes[1].triangles, vec![[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]]);
    }

    #[test]
    fn too_short_shape_is_an_error() {
        let scene = Scene {
            shapes: vec![Shape {
                name: "dot".into(),
                color: BLUE,
                merge_joins: false,
                pieces: vec![Piece::Line {
                    points: vec![[0.0, 0.0], [1.0, 1.0]],
                }],
            }],
        };
        let err = tessellate(&scene, TriangulateCfg::default()).unwrap_err();
        assert!(format!("{err:#}").contains("dot"));
    }
}
