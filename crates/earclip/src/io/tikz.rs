//! Plain-TeX + TikZ rendering of a ring and its triangles.

use std::path::Path;

use crate::ear::{EarSink, EarStep, Triangle};
use crate::geom2::Point;

const TEX_HEADER: &str = "\\input tikz.tex\n\
\\baselineskip=12pt\n\
\\hsize=6.3truein\n\
\\vsize=8.7truein\n";

fn coord(p: Point) -> String {
    format!("({}, {})", p.x, p.y)
}

/// One `\tikzpicture`: the unclipped part of the ring drawn thick, each
/// triangle drawn ultra thin.
///
/// `points` is the closed ring; `clipped` has one flag per vertex.
pub fn tikz_picture(points: &[Point], clipped: &[bool], triangles: &[Triangle], scale: f64) -> String {
    let mut out = format!("\\tikzpicture[scale={scale}]\n");
    let ring: Vec<String> = clipped
        .iter()
        .zip(points)
        .filter(|&(&c, _)| !c)
        .map(|(_, &p)| coord(p))
        .collect();
    if !ring.is_empty() {
        out.push_str(&format!("\\draw[thick]\n{} -- cycle;\n", ring.join(" --\n")));
    }
    for t in triangles {
        out.push_str(&format!(
            "\\draw[ultra thin]{} -- {} -- {} -- cycle;\n",
            coord(points[t[0]]),
            coord(points[t[1]]),
            coord(points[t[2]])
        ));
    }
    out.push_str("\\endtikzpicture\n");
    out
}

/// Full document: the input polygon, then its triangulation and area.
pub fn tex_document(points: &[Point], triangles: &[Triangle], area: f64, scale: f64) -> String {
    let none = vec![false; points.len().saturating_sub(1)];
    let mut out = String::from(TEX_HEADER);
    out.push_str("The original polygon:\n\\vskip12pt\n");
    out.push_str(&tikz_picture(points, &none, &[], scale));
    out.push_str("\\vfill\\eject\n");
    out.push_str("Triangulation:\n\\vskip12pt\n");
    out.push_str(&tikz_picture(points, &none, triangles, scale));
    out.push_str(&format!("\\vskip24pt\nArea = {area}\n"));
    out.push_str("\\vfill\\eject\n\\bye\n");
    out
}

pub fn write_tex_tikz<P: AsRef<Path>>(
    path: P,
    points: &[Point],
    triangles: &[Triangle],
    area: f64,
    scale: f64,
) -> std::io::Result<()> {
    std::fs::write(path, tex_document(points, triangles, area, scale))
}

/// Debug trace: one page per emitted triangle, showing what is left of the
/// ring and every triangle so far.
#[derive(Clone, Debug)]
pub struct TikzTrace<'a> {
    points: &'a [Point],
    scale: f64,
    body: String,
    pages: usize,
}

impl<'a> TikzTrace<'a> {
    pub fn new(points: &'a [Point], scale: f64) -> Self {
        Self {
            points,
            scale,
            body: String::new(),
            pages: 0,
        }
    }

    #[inline]
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Complete TeX document.
    pub fn finish(self) -> String {
        let mut out = String::from(TEX_HEADER);
        out.push_str("\\nopagenumbers\n");
        out.push_str(&self.body);
        out.push_str("\\bye\n");
        out
    }
}

impl EarSink for TikzTrace<'_> {
    fn record(&mut self, step: &EarStep<'_>) {
        if !step.decision.emits_triangle() {
            return;
        }
        self.body.push_str("Triangulation:\n\\vskip12pt\n");
        self.body
            .push_str(&tikz_picture(self.points, step.clipped, step.triangles, self.scale));
        self.body.push_str("\\vfill\\eject\n");
        self.pages += 1;
    }
}
