use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use earclip::api::{
    draw_polygon, read_points_csv, write_points_csv, write_tex_tikz, CircleJitterCfg, GeomCfg,
    OrientCfg, Polygon, TikzTrace, EPS,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod summary;

use summary::{code_rev, write_summary, Summary};

#[derive(Parser)]
#[command(name = "earclip")]
#[command(about = "Ear-clipping triangulation of simple polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a closed ring read from an `x,y` CSV file
    Triangulate(TriangulateArgs),
    /// Write a random simple polygon (closed ring) as CSV
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct TriangulateArgs {
    #[arg(long)]
    input: PathBuf,
    /// TeX document with the polygon, its triangles and the area
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// TeX trace with one page per emitted triangle
    #[arg(long)]
    trace: Option<PathBuf>,
    /// Seed for the winding resolver
    #[arg(long)]
    seed: Option<u64>,
    /// Rays per edge for the winding resolver
    #[arg(long, default_value_t = 32)]
    samples: usize,
    /// Tolerance behind every degeneracy decision
    #[arg(long, default_value_t = EPS)]
    eps: f64,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, default_value_t = 40)]
    vertices: usize,
    #[arg(long, default_value_t = 50.0)]
    radius: f64,
    /// Largest single vertex move
    #[arg(long, default_value_t = 10.0)]
    max_step: f64,
    /// Jitter passes; 0 writes the regular polygon
    #[arg(long, default_value_t = 40)]
    rounds: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate(args) => triangulate(args),
        Action::Generate(args) => generate(args),
    }
}

fn triangulate(args: TriangulateArgs) -> Result<()> {
    tracing::info!(input = %args.input.display(), scale = args.scale, "triangulate");
    let points = read_points_csv(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let geom = GeomCfg { eps: args.eps };
    let defaults = OrientCfg::default();
    let orient = OrientCfg {
        samples: args.samples,
        seed: args.seed.unwrap_or(defaults.seed),
        ..defaults
    };
    let poly = Polygon::with_cfg(points, geom, orient)
        .with_context(|| format!("invalid polygon in {}", args.input.display()))?;
    tracing::info!(vertices = poly.vertex_count(), winding = %poly.winding(), "polygon");

    let tri = match &args.trace {
        Some(path) => {
            let mut sink = TikzTrace::new(poly.points(), args.scale);
            let tri = poly.triangulate_traced(&mut sink)?;
            ensure_parent(path)?;
            std::fs::write(path, sink.finish())
                .with_context(|| format!("writing trace {}", path.display()))?;
            tri
        }
        None => poly.triangulate()?,
    };
    if tri.is_empty() {
        tracing::warn!("winding could not be resolved; no triangles emitted");
    }
    println!("Area = {}", tri.area);

    if let Some(out) = &args.out {
        ensure_parent(out)?;
        write_tex_tikz(out, poly.points(), &tri.triangles, tri.area, args.scale)
            .with_context(|| format!("writing {}", out.display()))?;
        let mut outputs = vec![out.to_string_lossy().into_owned()];
        if let Some(trace) = &args.trace {
            outputs.push(trace.to_string_lossy().into_owned());
        }
        let summary = Summary {
            code_rev: code_rev(),
            params: json!({
                "input": args.input.to_string_lossy(),
                "scale": args.scale,
                "seed": orient.seed,
                "samples": orient.samples,
                "eps": geom.eps,
            }),
            winding: poly.winding().to_string(),
            vertices: poly.vertex_count(),
            triangles: tri.len(),
            area: tri.area,
            outputs,
        };
        let path = write_summary(out, &summary)?;
        tracing::info!(summary = %path.display(), "summary written");
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    ensure!(args.vertices >= 3, "need at least 3 vertices, got {}", args.vertices);
    tracing::info!(vertices = args.vertices, seed = args.seed, out = %args.out.display(), "generate");
    let cfg = CircleJitterCfg {
        vertex_count: args.vertices,
        radius: args.radius,
        max_step: args.max_step,
        rounds: args.rounds,
    };
    let ring = draw_polygon(cfg, args.seed);
    ensure_parent(&args.out)?;
    write_points_csv(&args.out, &ring, true)
        .with_context(|| format!("writing {}", args.out.display()))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
