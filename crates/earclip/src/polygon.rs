//! Closed simple polygon with its winding resolved at construction.
//!
//! Invariants
//! - `points.len() >= 4` and `points.first() ≈ points.last()` (closed ring,
//!   compared with the configured tolerance).
//! - All coordinates are finite.
//! - No two non-adjacent edges intersect. This one is assumed, not checked;
//!   the engine reports `TriangulateError` if a violation derails it.
//! - `winding` is computed once and never changes.
//!
//! Triangulation state (clipped mask, cursor, area) is not stored here: each
//! `triangulate` call builds and owns its own.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ear::{EarClipper, EarSink, NoTrace, TriangulateError, Triangulation};
use crate::geom2::{GeomCfg, Point};
use crate::orient::{resolve_winding, OrientCfg, Winding};

/// Invalid input rejected at construction time.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// A ring needs three distinct vertices plus the repeated closing point.
    TooFewPoints { len: usize },
    /// First and last points differ.
    OpenRing { first: Point, last: Point },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { len } => {
                write!(f, "polygon needs at least 4 points (closed ring), got {len}")
            }
            Self::OpenRing { first, last } => write!(
                f,
                "polygon is not closed: first ({}, {}) != last ({}, {})",
                first.x, first.y, last.x, last.y
            ),
            Self::NonFinite { index } => write!(f, "non-finite coordinate at point {index}"),
        }
    }
}

impl std::error::Error for PolygonError {}

#[derive(Clone, Debug)]
pub struct Polygon {
    points: Vec<Point>,
    winding: Winding,
    geom: GeomCfg,
}

impl Polygon {
    /// Default tolerance and sampling, seeded resolver.
    pub fn new(points: Vec<Point>) -> Result<Self, PolygonError> {
        Self::with_cfg(points, GeomCfg::default(), OrientCfg::default())
    }

    /// Resolver randomness seeded from `orient.seed`.
    pub fn with_cfg(
        points: Vec<Point>,
        geom: GeomCfg,
        orient: OrientCfg,
    ) -> Result<Self, PolygonError> {
        let mut rng = StdRng::seed_from_u64(orient.seed);
        Self::with_rng(points, geom, orient, &mut rng)
    }

    /// Resolver randomness drawn from an injected generator.
    pub fn with_rng<R: Rng + ?Sized>(
        points: Vec<Point>,
        geom: GeomCfg,
        orient: OrientCfg,
        rng: &mut R,
    ) -> Result<Self, PolygonError> {
        validate(&points, geom)?;
        let winding = resolve_winding(&points, &orient, geom, rng);
        tracing::debug!(vertices = points.len() - 1, %winding, "polygon constructed");
        Ok(Self {
            points,
            winding,
            geom,
        })
    }

    /// The closed ring, including the repeated last point.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices (closing point excluded).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len() - 1
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    #[inline]
    pub fn geom_cfg(&self) -> GeomCfg {
        self.geom
    }

    /// Ear-clipping triangulation. Unknown winding yields an empty result.
    pub fn triangulate(&self) -> Result<Triangulation, TriangulateError> {
        self.triangulate_traced(&mut NoTrace)
    }

    /// As `triangulate`, reporting every ear decision to `sink`.
    pub fn triangulate_traced<S: EarSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<Triangulation, TriangulateError> {
        EarClipper::new(&self.points, self.winding, self.geom, sink).run()
    }
}

fn validate(points: &[Point], geom: GeomCfg) -> Result<(), PolygonError> {
    if points.len() < 4 {
        return Err(PolygonError::TooFewPoints { len: points.len() });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(PolygonError::NonFinite { index });
    }
    let first = points[0];
    let last = points[points.len() - 1];
    if !geom.points_close(first, last) {
        return Err(PolygonError::OpenRing { first, last });
    }
    Ok(())
}
