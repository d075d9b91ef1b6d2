//! File collaborators around the core: points CSV and TikZ/TeX output.
//!
//! - `read_points_csv` / `parse_points_csv`: `x,y` rows, no header.
//! - `write_points_csv`: same format, optionally closing the ring.
//! - `tex_document`, `write_tex_tikz`: plain-TeX page with the polygon and
//!   its triangles.
//! - `TikzTrace`: `EarSink` that renders one page per emitted triangle.

mod points;
mod tikz;

pub use points::{parse_points_csv, read_points_csv, write_points_csv, PointsIoError};
pub use tikz::{tex_document, tikz_picture, write_tex_tikz, TikzTrace};
