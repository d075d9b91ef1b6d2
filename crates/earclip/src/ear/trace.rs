//! Optional per-decision trace of the engine.
//!
//! A sink observes; it cannot change the triangulation.

use super::Triangle;

/// Outcome for one candidate ear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EarDecision {
    /// Valid ear: triangle emitted, `current` clipped.
    Accepted,
    /// Last three vertices emitted.
    Final,
    /// Turn ≈ ±π: `current` clipped without a triangle.
    Degenerate,
    /// Turn against the winding or ≈ 0.
    Reflex { turn: f64 },
    /// Diagonal crosses the remaining edge `(from, to)`.
    Blocked { edge: (usize, usize) },
    /// Remaining vertex inside the candidate triangle.
    Occupied { vertex: usize },
}

impl EarDecision {
    #[inline]
    pub fn emits_triangle(&self) -> bool {
        matches!(self, EarDecision::Accepted | EarDecision::Final)
    }
}

/// Snapshot handed to a sink after the decision has been applied.
#[derive(Clone, Copy, Debug)]
pub struct EarStep<'a> {
    pub cursor: usize,
    pub prev: usize,
    pub current: usize,
    pub next: usize,
    pub decision: EarDecision,
    pub clipped: &'a [bool],
    pub triangles: &'a [Triangle],
}

pub trait EarSink {
    fn record(&mut self, step: &EarStep<'_>);
}

impl<F: FnMut(&EarStep<'_>)> EarSink for F {
    fn record(&mut self, step: &EarStep<'_>) {
        self(step)
    }
}

/// Discards every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl EarSink for NoTrace {
    #[inline]
    fn record(&mut self, _step: &EarStep<'_>) {}
}
