use std::f64::consts::{PI, TAU};

use super::types::{Point, Polar, EPS};

/// `|a - b| < EPS`.
#[inline]
pub fn close_enough(a: f64, b: f64) -> bool {
    close_enough_eps(a, b, EPS)
}

/// `|a - b| < eps`.
#[inline]
pub fn close_enough_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Both coordinates within `eps`.
#[inline]
pub fn points_close(p: Point, q: Point, eps: f64) -> bool {
    close_enough_eps(p.x, q.x, eps) && close_enough_eps(p.y, q.y, eps)
}

/// Euclidean distance.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q - p).norm()
}

/// Direction of `p → q` w.r.t. the x-axis, in (-π, π].
#[inline]
pub fn angle(p: Point, q: Point) -> f64 {
    (q.y - p.y).atan2(q.x - p.x)
}

#[inline]
pub fn polar_coordinate(p: Point, q: Point) -> Polar {
    Polar {
        length: distance(p, q),
        angle: angle(p, q),
    }
}

/// Single-step wrap of a rotation into (-π, π].
///
/// Pre: `|theta| < 3π` (difference of two `angle` values). This is not a
/// general modulo.
#[inline]
pub fn constrain_rotational_angle(theta: f64) -> f64 {
    if theta > PI {
        theta - TAU
    } else if theta <= -PI {
        theta + TAU
    } else {
        theta
    }
}

/// `(b - a) × (c - a)`; positive when `a, b, c` turn counter-clockwise.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Unsigned triangle area.
#[inline]
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    0.5 * cross(a, b, c).abs()
}

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) * 0.5
}

/// Inclusive containment: points on the boundary of `abc` count as inside.
/// Works for either orientation of `abc`.
pub fn point_in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
