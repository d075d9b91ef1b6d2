//! Ear-clipping runner: owns the per-call working state.

use std::f64::consts::PI;

use super::register::register_triangle;
use super::ring::ClipMask;
use super::trace::{EarDecision, EarSink, EarStep};
use super::{Triangle, TriangulateError, Triangulation};
use crate::geom2::{
    angle, constrain_rotational_angle, does_intersect_eps, point_in_triangle, triangle_area,
    GeomCfg, LineKind, Point,
};
use crate::orient::Winding;

/// One triangulation run over a closed ring.
///
/// Holds the clipped mask, cursor, area accumulator and output; nothing is
/// shared with the polygon, so runs are independent.
pub(crate) struct EarClipper<'a, S: EarSink + ?Sized> {
    points: &'a [Point],
    winding: Winding,
    geom: GeomCfg,
    sink: &'a mut S,
    mask: ClipMask,
    cursor: usize,
    triangles: Vec<Triangle>,
    area: f64,
}

impl<'a, S: EarSink + ?Sized> EarClipper<'a, S> {
    /// `points` is a closed ring (last point repeats the first).
    pub(crate) fn new(points: &'a [Point], winding: Winding, geom: GeomCfg, sink: &'a mut S) -> Self {
        let vertex_count = points.len().saturating_sub(1);
        Self {
            points,
            winding,
            geom,
            sink,
            mask: ClipMask::new(vertex_count),
            cursor: 0,
            triangles: Vec::with_capacity(vertex_count.saturating_sub(2)),
            area: 0.0,
        }
    }

    pub(crate) fn run(mut self) -> Result<Triangulation, TriangulateError> {
        if !self.winding.is_known() {
            tracing::info!("winding unknown; empty triangulation");
            return Ok(Triangulation::default());
        }
        let n = self.mask.len();
        let mut stalled = 0usize;

        while self.mask.remaining() > 3 {
            let (prev, cur, next) = self.triple()?;
            let decision = self.examine(prev, cur, next);
            tracing::debug!(cursor = self.cursor, prev, cur, next, ?decision, "ear candidate");
            match decision {
                EarDecision::Accepted => {
                    self.emit(prev, cur, next);
                    self.mask.clip(cur);
                    stalled = 0;
                }
                EarDecision::Degenerate => {
                    self.mask.clip(cur);
                    self.advance();
                    stalled = 0;
                }
                _ => {
                    self.advance();
                    stalled += 1;
                }
            }
            self.report(prev, cur, next, decision);
            if stalled >= n {
                return Err(TriangulateError::NoEar {
                    remaining: self.mask.remaining(),
                });
            }
        }

        let (prev, cur, next) = self.triple()?;
        self.emit(prev, cur, next);
        self.report(prev, cur, next, EarDecision::Final);
        tracing::info!(
            triangles = self.triangles.len(),
            area = self.area,
            "triangulation done"
        );
        Ok(Triangulation {
            triangles: self.triangles,
            area: self.area,
        })
    }

    fn triple(&self) -> Result<(usize, usize, usize), TriangulateError> {
        self.mask
            .three_from(self.cursor)
            .ok_or(TriangulateError::NoUnclippedTriple {
                cursor: self.cursor,
                remaining: self.mask.remaining(),
            })
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.mask.len();
    }

    fn examine(&self, prev: usize, cur: usize, next: usize) -> EarDecision {
        let (a, b, c) = (self.points[prev], self.points[cur], self.points[next]);
        let turn = constrain_rotational_angle(angle(b, c) - angle(a, b));

        if self.geom.close_enough(turn, PI) || self.geom.close_enough(turn, -PI) {
            return EarDecision::Degenerate;
        }
        let convex = match self.winding {
            Winding::CounterClockwise => turn > 0.0,
            Winding::Clockwise => turn < 0.0,
            Winding::Unknown => false,
        };
        if !convex || self.geom.close_enough(turn, 0.0) {
            return EarDecision::Reflex { turn };
        }
        if let Some(edge) = self.crossing_edge(prev, cur, next) {
            return EarDecision::Blocked { edge };
        }
        if let Some(vertex) = self.vertex_inside(prev, cur, next) {
            return EarDecision::Occupied { vertex };
        }
        EarDecision::Accepted
    }

    /// First remaining edge crossed by the diagonal `prev → next`.
    ///
    /// Edges sharing an endpoint with the ear can only meet the diagonal at
    /// that endpoint, so they are skipped.
    fn crossing_edge(&self, prev: usize, cur: usize, next: usize) -> Option<(usize, usize)> {
        let (p, q) = (self.points[prev], self.points[next]);
        let touches = |i: usize| i == prev || i == cur || i == next;
        self.mask
            .edges()
            .filter(|&(i, j)| !touches(i) && !touches(j))
            .find(|&(i, j)| {
                does_intersect_eps(
                    p,
                    q,
                    self.points[i],
                    self.points[j],
                    LineKind::Segment,
                    true,
                    self.geom.eps,
                )
            })
    }

    /// First remaining vertex lying in (or on) the candidate triangle, ignoring
    /// vertices that coincide with one of its corners.
    fn vertex_inside(&self, prev: usize, cur: usize, next: usize) -> Option<usize> {
        let (a, b, c) = (self.points[prev], self.points[cur], self.points[next]);
        self.mask
            .unclipped()
            .filter(|&w| w != prev && w != cur && w != next)
            .find(|&w| {
                let p = self.points[w];
                let corner = [a, b, c].iter().any(|&v| self.geom.points_close(p, v));
                !corner && point_in_triangle(a, b, c, p)
            })
    }

    fn emit(&mut self, prev: usize, cur: usize, next: usize) {
        self.triangles
            .push(register_triangle(self.winding, prev, cur, next));
        self.area += triangle_area(self.points[prev], self.points[cur], self.points[next]);
    }

    fn report(&mut self, prev: usize, current: usize, next: usize, decision: EarDecision) {
        let step = EarStep {
            cursor: self.cursor,
            prev,
            current,
            next,
            decision,
            clipped: self.mask.as_slice(),
            triangles: &self.triangles,
        };
        self.sink.record(&step);
    }
}
