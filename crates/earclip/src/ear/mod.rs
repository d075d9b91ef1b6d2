//! Ear-clipping triangulation of a closed simple polygon.
//!
//! Purpose
//! - Consume vertices from a circular clipped mask until one triangle is left,
//!   emitting one triangle per valid ear.
//!
//! Decision per candidate `(previous, current, next)`
//! 1. Turn at `current` ≈ ±π: fold/spike, clip without a triangle.
//! 2. Turn disagrees with the winding, or ≈ 0: reflex or straight, skip.
//! 3. Diagonal `previous → next` crosses a remaining edge, or a remaining
//!    vertex sits inside the candidate triangle: blocked, skip.
//! 4. Otherwise emit the ear and clip `current`.
//!
//! Cost is O(N²): every candidate scans the remaining boundary.
//!
//! Code cross-refs: `geom2`, `orient::Winding`, `polygon::Polygon`.

mod engine;
mod register;
mod ring;
mod trace;

pub(crate) use engine::EarClipper;
pub use register::register_triangle;
pub use ring::ClipMask;
pub use trace::{EarDecision, EarSink, EarStep, NoTrace};

use std::fmt;

/// Vertex indices into the polygon's point sequence.
pub type Triangle = [usize; 3];

/// Output of one triangulation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    pub triangles: Vec<Triangle>,
    /// Sum of the emitted triangles' areas.
    pub area: f64,
}

impl Triangulation {
    /// True for the unknown-winding result.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }
}

/// Internal invariant violations. Both mean the input was not a simple
/// polygon (or the tolerance is badly chosen); no partial result is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriangulateError {
    /// Circular search could not find three unclipped vertices.
    NoUnclippedTriple { cursor: usize, remaining: usize },
    /// A full pass of the cursor examined every remaining vertex without
    /// clipping any.
    NoEar { remaining: usize },
}

impl fmt::Display for TriangulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoUnclippedTriple { cursor, remaining } => write!(
                f,
                "no three unclipped vertices from cursor {cursor} ({remaining} remaining)"
            ),
            Self::NoEar { remaining } => {
                write!(f, "no valid ear among {remaining} remaining vertices")
            }
        }
    }
}

impl std::error::Error for TriangulateError {}

#[cfg(test)]
mod tests;
