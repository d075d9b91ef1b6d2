//! Ear-clipping triangulation of simple polygons.
//!
//! Layers (leaves first)
//! - `geom2`: points, angles, areas, intersection tests, shared tolerance.
//! - `orient`: winding direction by randomized ray casting.
//! - `polygon`: validated closed ring with its winding.
//! - `ear`: the ear-clipping engine, trace sink and triangle registration.
//! - `io`, `randpoly`: CSV/TikZ collaborators and a random polygon source.
//!
//! API Policy
//! - `api` and `prelude` are convenience surfaces; module paths are the
//!   source of truth.

pub mod api;
pub mod ear;
pub mod geom2;
pub mod io;
pub mod orient;
pub mod polygon;
pub mod randpoly;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ear::{
        EarDecision, EarSink, EarStep, NoTrace, Triangle, TriangulateError, Triangulation,
    };
    pub use crate::geom2::{GeomCfg, LineKind, Point};
    pub use crate::orient::{OrientCfg, Winding};
    pub use crate::polygon::{Polygon, PolygonError};
}

/// Triangulate a closed ring with default tolerance and sampling.
///
/// Convenience for callers that do not care about construction errors being
/// distinct from triangulation errors.
pub fn triangulate_ring(
    points: Vec<geom2::Point>,
) -> Result<ear::Triangulation, Box<dyn std::error::Error + Send + Sync>> {
    let poly = polygon::Polygon::new(points)?;
    Ok(poly.triangulate()?)
}
