use super::Triangle;
use crate::orient::Winding;

/// Order an ear `(prev, cur, next)` for output.
///
/// Counter-clockwise rings keep the order; clockwise rings swap the last two,
/// so every emitted triangle is counter-clockwise in the plane (normal +z)
/// whichever way the source ring runs.
///
/// Anything not clockwise keeps the order. `Winding::Unknown` never reaches
/// here from the engine, which returns an empty triangulation first.
#[inline]
pub fn register_triangle(winding: Winding, prev: usize, cur: usize, next: usize) -> Triangle {
    match winding {
        Winding::Clockwise => [prev, next, cur],
        Winding::CounterClockwise | Winding::Unknown => [prev, cur, next],
    }
}
