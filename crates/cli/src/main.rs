use anyhow::{bail, Context, Result};
use bezfill::api::{
    draw_star_polygon, sample_quadratic, triangulate_with, ConvexityTest, DegeneratePolicy,
    Point2, ReplayToken, StarCfg, Triangulation, TriangulateCfg, TriangulationStatus,
    VertexCount,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use nalgebra::Vector2;
use serde_json::{json, Value};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Flatten quadratic Bézier outlines and triangulate them for rendering")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print `n + 1` samples of one quadratic segment as JSON
    Sample {
        #[arg(long, value_parser = parse_point)]
        p0: [f64; 2],
        #[arg(long, value_parser = parse_point)]
        p1: [f64; 2],
        #[arg(long, value_parser = parse_point)]
        p2: [f64; 2],
        #[arg(short, long, default_value_t = 100)]
        n: usize,
    },
    /// Triangulate one polygon (`[[x, y], ...]`) and write triangles + indices
    Triangulate {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[command(flatten)]
        clip: ClipArgs,
    },
    /// Tessellate a scene file (or the built-in umbrella) into colored triangles
    Scene {
        /// Scene JSON; the built-in umbrella when omitted
        #[arg(long)]
        input: Option<String>,
        #[arg(long)]
        out: String,
        #[command(flatten)]
        clip: ClipArgs,
    },
    /// Write a reproducible random star-shaped polygon
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(short, long, default_value_t = 24)]
        n: usize,
        #[arg(long)]
        clockwise: bool,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy, Debug)]
struct ClipArgs {
    /// Reflex-vertex test used by the ear scan
    #[arg(long, value_enum, default_value_t = Convexity::Cross)]
    convexity: Convexity,
    /// Handling of zero-area candidate ears
    #[arg(long, value_enum, default_value_t = Degenerate::Skip)]
    degenerate: Degenerate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Convexity {
    /// Unsigned turning angle >= π (legacy)
    TurningAngle,
    /// Signed cross product
    Cross,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Degenerate {
    Skip,
    Accept,
}

impl ClipArgs {
    fn cfg(self) -> TriangulateCfg {
        TriangulateCfg {
            convexity: match self.convexity {
                Convexity::TurningAngle => ConvexityTest::TurningAngle,
                Convexity::Cross => ConvexityTest::Cross,
            },
            degenerate: match self.degenerate {
                Degenerate::Skip => DegeneratePolicy::Skip,
                Degenerate::Accept => DegeneratePolicy::Accept,
            },
        }
    }

    fn params(self) -> Value {
        json!({
            "convexity": format!("{:?}", self.convexity),
            "degenerate": format!("{:?}", self.degenerate),
        })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample { p0, p1, p2, n } => sample(p0, p1, p2, n),
        Action::Triangulate { input, out, clip } => triangulate(&input, &out, clip),
        Action::Scene { input, out, clip } => scene(input.as_deref(), &out, clip),
        Action::Random {
            seed,
            index,
            n,
            clockwise,
            out,
        } => random(seed, index, n, clockwise, &out),
        Action::Report => report(),
    }
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok([x, y])
}

fn to_point(p: [f64; 2]) -> Point2 {
    Vector2::new(p[0], p[1])
}

fn from_points(pts: &[Point2]) -> Vec<[f64; 2]> {
    pts.iter().map(|p| [p.x, p.y]).collect()
}

fn sample(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2], n: usize) -> Result<()> {
    let pts = sample_quadratic(to_point(p0), to_point(p1), to_point(p2), n);
    println!("{}", serde_json::to_string(&from_points(&pts))?);
    Ok(())
}

fn read_polygon(path: &str) -> Result<Vec<Point2>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading polygon {path}"))?;
    let raw: Vec<[f64; 2]> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing polygon {path}"))?;
    Ok(raw.into_iter().map(to_point).collect())
}

fn triangulation_json(tri: &Triangulation) -> Value {
    let remaining = match tri.status {
        TriangulationStatus::Complete => 0,
        TriangulationStatus::Stalled { remaining } => remaining,
    };
    let triangles: Vec<[[f64; 2]; 3]> = tri
        .triangles
        .iter()
        .map(|t| t.vertices.map(|v| [v.x, v.y]))
        .collect();
    json!({
        "complete": tri.is_complete(),
        "remaining": remaining,
        "reversed": tri.reversed,
        "triangles": triangles,
        "indices": tri.indices,
    })
}

fn write_json(out: &str, value: &impl serde::Serialize) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}

fn triangulate(input: &str, out: &str, clip: ClipArgs) -> Result<()> {
    tracing::info!(input, out, ?clip, "triangulate");
    let pts = read_polygon(input)?;
    let tri = triangulate_with(&pts, clip.cfg())?;
    if !tri.is_complete() {
        tracing::warn!(status = ?tri.status, "partial triangulation written");
    }
    write_json(out, &triangulation_json(&tri))?;
    let summary = json!({ "triangles": tri.triangles.len(), "complete": tri.is_complete() });
    write_sidecar(
        out,
        Payload::new("triangulate", clip.params())
            .with_input(input)
            .with_summary(summary),
    )?;
    Ok(())
}

fn scene(input: Option<&str>, out: &str, clip: ClipArgs) -> Result<()> {
    tracing::info!(input = ?input, out, ?clip, "scene");
    let (shapes, payload) = match input {
        Some(path) => (
            scene::load(path)?,
            Payload::new("scene", clip.params()).with_input(path),
        ),
        None => (scene::umbrella(), Payload::new("scene", clip.params())),
    };
    let meshes = scene::tessellate(&shapes, clip.cfg())?;
    write_json(out, &meshes)?;
    let stalled: Vec<&str> = meshes
        .iter()
        .filter(|m| !m.complete)
        .map(|m| m.name.as_str())
        .collect();
    let triangles: usize = meshes.iter().map(|m| m.triangles.len()).sum();
    write_sidecar(
        out,
        payload.with_summary(json!({ "triangles": triangles, "stalled": stalled })),
    )?;
    Ok(())
}

fn random(seed: u64, index: u64, n: usize, clockwise: bool, out: &str) -> Result<()> {
    if n < 3 {
        bail!("a polygon needs at least 3 vertices, got {n}");
    }
    tracing::info!(seed, index, n, clockwise, out, "random");
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        clockwise,
        ..StarCfg::default()
    };
    let pts = draw_star_polygon(cfg, ReplayToken { seed, index });
    write_json(out, &from_points(&pts))?;
    write_sidecar(
        out,
        Payload::new(
            "random",
            json!({ "seed": seed, "index": index, "n": n, "clockwise": clockwise }),
        ),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "bezfill": bezfill::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("0.5, -1").unwrap(), [0.5, -1.0]);
        assert!(parse_point("0.5").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn cli_parses_clip_flags() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "triangulate",
            "--input",
            "in.json",
            "--out",
            "out.json",
            "--convexity",
            "turning-angle",
            "--degenerate",
            "accept",
        ])
        .unwrap();
        match cmd.action {
            Action::Triangulate { clip, .. } => {
                assert_eq!(clip.cfg(), TriangulateCfg::legacy());
            }
            _ => panic!("expected triangulate"),
        }
    }

    #[test]
    fn triangulate_round_trip_through_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.json");
        let out = dir.path().join("out/tris.json");
        std::fs::write(&input, "[[0,0],[0,1],[1,1],[1,0]]").unwrap();
        let clip = ClipArgs {
            convexity: Convexity::Cross,
            degenerate: Degenerate::Skip,
        };
        triangulate(input.to_str().unwrap(), out.to_str().unwrap(), clip).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["complete"], true);
        assert_eq!(parsed["reversed"], true);
        assert_eq!(parsed["triangles"].as_array().unwrap().len(), 2);
        let prov: Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("out/tris.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["command"], "triangulate");
        assert_eq!(prov["summary"]["triangles"], 2);
    }

    #[test]
    fn random_then_scene_outputs() {
        let dir = tempdir().unwrap();
        let poly = dir.path().join("star.json");
        random(7, 3, 30, false, poly.to_str().unwrap()).unwrap();
        let pts = read_polygon(poly.to_str().unwrap()).unwrap();
        assert_eq!(pts.len(), 30);
        assert!(random(7, 3, 2, false, poly.to_str().unwrap()).is_err());

        let mesh = dir.path().join("umbrella.json");
        let clip = ClipArgs {
            convexity: Convexity::Cross,
            degenerate: Degenerate::Skip,
        };
        scene(None, mesh.to_str().unwrap(), clip).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&mesh).unwrap()).unwrap();
        let names: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["shaft", "tip", "fabric", "handle"]);
    }
}
