//! Random simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic source of non-convex test outlines for property tests,
//!   benchmarks, and the CLI. Same draw for the same token, always.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter, sort, and give each angle a jittered radius. Connecting the
//!   points in angle order yields a simple polygon that is star-shaped around
//!   the origin (usually non-convex once `radial_jitter > 0`).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point2;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.95] so radii stay positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    /// Emit in clockwise order (exercises winding normalization).
    pub clockwise: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(24),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
            clockwise: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon, star-shaped around the origin.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut pts: Vec<Point2> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    if cfg.clockwise {
        pts.reverse();
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::winding::{orientation, Winding};

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 40 },
            ..StarCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_star_polygon(cfg, tok);
        let b = draw_star_polygon(cfg, tok);
        assert_eq!(a, b);
        let c = draw_star_polygon(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn orientation_follows_flag() {
        let tok = ReplayToken { seed: 3, index: 0 };
        let ccw = draw_star_polygon(StarCfg::default(), tok);
        assert_eq!(ccw.len(), 24);
        assert_eq!(orientation(&ccw), Winding::CounterClockwise);
        let cw = draw_star_polygon(
            StarCfg {
                clockwise: true,
                ..StarCfg::default()
            },
            tok,
        );
        assert_eq!(orientation(&cw), Winding::Clockwise);
    }

    #[test]
    fn radii_stay_within_jitter() {
        let cfg = StarCfg {
            radial_jitter: 0.25,
            base_radius: 2.0,
            ..StarCfg::default()
        };
        let pts = draw_star_polygon(cfg, ReplayToken { seed: 9, index: 1 });
        for p in pts {
            let r = p.norm();
            assert!(r >= 1.5 - 1e-12 && r <= 2.5 + 1e-12);
        }
    }
}
