//! Curated flat surface for callers (CLI, benches).
//!
//! Not a stability promise: items move when module layout changes.

// Kernel
pub use crate::geom2::{
    angle, close_enough, close_enough_eps, constrain_rotational_angle, distance,
    does_intersect, does_intersect_eps, midpoint, polar_coordinate, triangle_area, GeomCfg,
    LineKind, Point, Polar, EPS,
};
// Winding
pub use crate::orient::{resolve_winding, OrientCfg, Winding};
// Polygon + engine
pub use crate::ear::{
    register_triangle, ClipMask, EarDecision, EarSink, EarStep, NoTrace, Triangle,
    TriangulateError, Triangulation,
};
pub use crate::polygon::{Polygon, PolygonError};
// Collaborators
pub use crate::io::{
    parse_points_csv, read_points_csv, tex_document, tikz_picture, write_points_csv,
    write_tex_tikz, PointsIoError, TikzTrace,
};
pub use crate::randpoly::{
    close_ring, draw_polygon, move_points_randomly, place_points_around_circle, CircleJitterCfg,
};
