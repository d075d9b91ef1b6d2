//! Intersection of `p → q` with the segment `r → s`.
//!
//! Solves `p + a (q - p) = r + b (s - r)`, i.e. in matrix form
//! `[q - p  r - s] [a b]ᵀ = r - p`. A (near-)zero determinant means the two
//! carriers are parallel and the answer is "no intersection".

use nalgebra::Matrix2;

use super::types::{Point, EPS};
use super::util::close_enough_eps;

/// How far the first carrier `p → q` extends. The second one (`r → s`) is
/// always the closed/open segment `b ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineKind {
    /// `a ∈ [0, 1]`.
    #[default]
    Segment,
    /// `a ≥ 0`: starts at `p`, passes through `q`, unbounded beyond.
    Ray,
    /// `a` unconstrained.
    InfiniteLine,
}

/// Intersection test with the default tolerance.
///
/// `ignore_endpoints = true` uses strict bounds, so touching at an endpoint is
/// not an intersection; `false` uses inclusive bounds.
#[inline]
pub fn does_intersect(
    p: Point,
    q: Point,
    r: Point,
    s: Point,
    kind: LineKind,
    ignore_endpoints: bool,
) -> bool {
    does_intersect_eps(p, q, r, s, kind, ignore_endpoints, EPS)
}

/// Intersection test with an explicit determinant tolerance.
pub fn does_intersect_eps(
    p: Point,
    q: Point,
    r: Point,
    s: Point,
    kind: LineKind,
    ignore_endpoints: bool,
    eps: f64,
) -> bool {
    let m = Matrix2::from_columns(&[q - p, r - s]);
    if close_enough_eps(m.determinant(), 0.0, eps) {
        return false;
    }
    let Some(minv) = m.try_inverse() else {
        return false;
    };
    let ab = minv * (r - p);
    let (a, b) = (ab.x, ab.y);

    if ignore_endpoints {
        let b_in = 0.0 < b && b < 1.0;
        match kind {
            LineKind::Segment => b_in && 0.0 < a && a < 1.0,
            LineKind::Ray => b_in && 0.0 < a,
            LineKind::InfiniteLine => b_in,
        }
    } else {
        let b_in = (0.0..=1.0).contains(&b);
        match kind {
            LineKind::Segment => b_in && (0.0..=1.0).contains(&a),
            LineKind::Ray => b_in && 0.0 <= a,
            LineKind::InfiniteLine => b_in,
        }
    }
}
