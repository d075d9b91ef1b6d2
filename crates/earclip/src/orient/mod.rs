//! Winding direction of a closed ring by randomized ray casting.
//!
//! Model
//! - For each edge, cast `samples` rays from the edge midpoint into the half
//!   plane to the edge's LEFT (directions uniform over an angle of π starting
//!   at the edge direction).
//! - A ray is "interior" when its crossing count with the ring is even. The
//!   originating edge contributes one crossing at the midpoint itself.
//! - A strong majority decides: mostly interior means left is inside
//!   (counter-clockwise), mostly exterior means right is inside (clockwise).
//!   Anything in between is inconclusive and the next edge is tried.
//!
//! A cumulative turning-angle sum is deliberately not used: it is unreliable
//! near cusps and collinear neighbours.
//!
//! Code cross-refs: `geom2::{does_intersect_eps, LineKind}`, `polygon::Polygon`.

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;
use rand::Rng;

use crate::geom2::{angle, does_intersect_eps, midpoint, GeomCfg, LineKind, Point};

/// Rotational sense of a closed ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Interior lies to the left of every edge.
    CounterClockwise,
    /// Interior lies to the right of every edge.
    Clockwise,
    /// No edge produced a confident decision.
    Unknown,
}

impl Winding {
    #[inline]
    pub fn is_known(self) -> bool {
        self != Winding::Unknown
    }

    /// Side of each edge that faces the interior: `"left"`, `"right"` or `"unknown"`.
    pub fn interior_side(self) -> &'static str {
        match self {
            Winding::CounterClockwise => "left",
            Winding::Clockwise => "right",
            Winding::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Winding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Winding::CounterClockwise => "counter-clockwise",
            Winding::Clockwise => "clockwise",
            Winding::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Sampling configuration for the resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientCfg {
    /// Rays per edge.
    pub samples: usize,
    /// Interior fraction at or above which the ring is counter-clockwise.
    pub interior_hi: f64,
    /// Interior fraction at or below which the ring is clockwise.
    pub interior_lo: f64,
    /// Seed for the default `StdRng` when no generator is injected.
    pub seed: u64,
}

impl Default for OrientCfg {
    fn default() -> Self {
        Self {
            samples: 32,
            interior_hi: 0.8,
            interior_lo: 0.2,
            seed: 0x5eed_ea12,
        }
    }
}

/// Resolve the winding of a closed ring (`points.first() == points.last()`).
///
/// Returns `Winding::Unknown` for rings with fewer than three edges or when
/// every edge is inconclusive.
pub fn resolve_winding<R: Rng + ?Sized>(
    points: &[Point],
    cfg: &OrientCfg,
    geom: GeomCfg,
    rng: &mut R,
) -> Winding {
    if points.len() < 4 {
        return Winding::Unknown;
    }
    let edges = points.len() - 1;
    for i in 0..edges {
        let Some(frac) = interior_fraction(points, i, cfg, geom, rng) else {
            tracing::debug!(edge = i, "zero-length edge skipped");
            continue;
        };
        if frac >= cfg.interior_hi {
            tracing::debug!(edge = i, frac, "winding: counter-clockwise");
            return Winding::CounterClockwise;
        }
        if frac <= cfg.interior_lo {
            tracing::debug!(edge = i, frac, "winding: clockwise");
            return Winding::Clockwise;
        }
        tracing::debug!(edge = i, frac, "inconclusive edge");
    }
    Winding::Unknown
}

/// Fraction of rays cast left of edge `i` that stay inside the ring.
/// `None` for a zero-length edge (no direction to sample around).
fn interior_fraction<R: Rng + ?Sized>(
    points: &[Point],
    i: usize,
    cfg: &OrientCfg,
    geom: GeomCfg,
    rng: &mut R,
) -> Option<f64> {
    let (p, q) = (points[i], points[i + 1]);
    if geom.points_close(p, q) {
        return None;
    }
    let edges = points.len() - 1;
    let origin = midpoint(p, q);
    let base = angle(p, q);
    let samples = cfg.samples.max(1);

    let mut interior = 0usize;
    for _ in 0..samples {
        let theta = base + rng.gen::<f64>() * PI;
        let tip = origin + Vector2::new(theta.cos(), theta.sin());
        let others = (0..edges)
            .filter(|&j| j != i)
            .filter(|&j| {
                does_intersect_eps(
                    origin,
                    tip,
                    points[j],
                    points[j + 1],
                    LineKind::Ray,
                    false,
                    geom.eps,
                )
            })
            .count();
        // +1: the ray leaves through its own edge at the midpoint.
        if (others + 1) % 2 == 0 {
            interior += 1;
        }
    }
    Some(interior as f64 / samples as f64)
}
