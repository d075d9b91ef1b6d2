//! Basic 2D types and the shared tolerance.
//!
//! - `Point`: alias for `Vector2<f64>`.
//! - `Polar`: transient (length, angle) pair computed from two points.
//! - `GeomCfg`: carries the tolerance so callers can override it in one place.

use nalgebra::Vector2;

use super::util::{close_enough_eps, points_close};

/// A point (or free vector) in the plane.
pub type Point = Vector2<f64>;

/// Default tolerance for scalar comparisons.
pub const EPS: f64 = 1e-12;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

impl GeomCfg {
    /// `|a - b| < eps` with this config's tolerance.
    #[inline]
    pub fn close_enough(&self, a: f64, b: f64) -> bool {
        close_enough_eps(a, b, self.eps)
    }

    /// Component-wise closeness of two points.
    #[inline]
    pub fn points_close(&self, p: Point, q: Point) -> bool {
        points_close(p, q, self.eps)
    }
}

/// Polar form of the segment `p → q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub length: f64,
    /// Radians, (-π, π].
    pub angle: f64,
}
