//! 2D geometric kernel for ear clipping.
//!
//! Purpose
//! - Pure point/vector helpers (distance, angle, polar form, triangle area).
//! - Segment / ray / line intersection by solving the 2×2 parameter system.
//! - One shared tolerance (`EPS`, or `GeomCfg::eps` when overridden) behind
//!   every degeneracy decision made by the resolver and the engine.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (aliased `Point`).
//! - Angles are radians in (-π, π].
//! - Parallel or collinear segments never intersect (documented approximation:
//!   collinear overlap is not detected).
//!
//! Code cross-refs: `orient::resolve_winding`, `ear::EarClipper`.

mod intersect;
mod types;
mod util;

pub use intersect::{does_intersect, does_intersect_eps, LineKind};
pub use types::{GeomCfg, Point, Polar, EPS};
pub use util::{
    angle, close_enough, close_enough_eps, constrain_rotational_angle, cross, distance, midpoint,
    point_in_triangle, points_close, polar_coordinate, triangle_area,
};
