use super::*;
use crate::geom2::{cross, does_intersect, GeomCfg, LineKind, Point};
use crate::orient::{OrientCfg, Winding};
use crate::polygon::Polygon;
use crate::randpoly::{close_ring, draw_polygon, place_points_around_circle, CircleJitterCfg};
use nalgebra::vector;
use proptest::prelude::*;
use std::f64::consts::TAU;

fn ring(pts: &[(f64, f64)]) -> Vec<Point> {
    close_ring(pts.iter().map(|&(x, y)| vector![x, y]).collect())
}

fn shoelace(ring: &[Point]) -> f64 {
    let n = ring.len() - 1;
    let twice: f64 = (0..n)
        .map(|i| ring[i].x * ring[i + 1].y - ring[i + 1].x * ring[i].y)
        .sum();
    0.5 * twice.abs()
}

fn assert_all_ccw(points: &[Point], tri: &Triangulation) {
    for t in &tri.triangles {
        let c = cross(points[t[0]], points[t[1]], points[t[2]]);
        assert!(c > 0.0, "triangle {t:?} is not counter-clockwise ({c})");
    }
}

fn star(spikes: usize, outer: f64, inner: f64) -> Vec<Point> {
    let n = 2 * spikes;
    let pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = TAU * k as f64 / n as f64;
            let r = if k % 2 == 0 { outer } else { inner };
            vector![r * th.cos(), r * th.sin()]
        })
        .collect();
    close_ring(pts)
}

#[test]
fn square_ccw() {
    let pts = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let poly = Polygon::new(pts.clone()).unwrap();
    let tri = poly.triangulate().unwrap();
    assert_eq!(tri.triangles, vec![[0, 1, 2], [0, 2, 3]]);
    assert!((tri.area - 1.0).abs() < 1e-12);
    assert_all_ccw(&pts, &tri);
}

#[test]
fn square_cw_swaps_registration() {
    let pts = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let poly = Polygon::new(pts.clone()).unwrap();
    assert_eq!(poly.winding(), Winding::Clockwise);
    let tri = poly.triangulate().unwrap();
    assert_eq!(tri.triangles, vec![[0, 2, 1], [0, 3, 2]]);
    assert!((tri.area - 1.0).abs() < 1e-12);
    assert_all_ccw(&pts, &tri);
}

#[test]
fn single_triangle() {
    let pts = ring(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)]);
    let tri = Polygon::new(pts).unwrap().triangulate().unwrap();
    assert_eq!(tri.len(), 1);
    assert!((tri.area - 2.0).abs() < 1e-12);
}

#[test]
fn concave_l_shape() {
    let pts = ring(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ]);
    let tri = Polygon::new(pts.clone()).unwrap().triangulate().unwrap();
    assert_eq!(tri.len(), 4);
    assert!((tri.area - 3.0).abs() < 1e-12);
    assert_all_ccw(&pts, &tri);
}

#[test]
fn circles_both_directions() {
    let ccw = close_ring(place_points_around_circle(1.0, 12));
    let mut cw = ccw.clone();
    cw.reverse();
    let expected = shoelace(&ccw);
    for pts in [ccw, cw] {
        let tri = Polygon::new(pts.clone()).unwrap().triangulate().unwrap();
        assert_eq!(tri.len(), 10);
        assert!((tri.area - expected).abs() < 1e-12);
        assert_all_ccw(&pts, &tri);
    }
}

#[test]
fn star_polygon() {
    let pts = star(8, 1.0, 0.4);
    let tri = Polygon::new(pts.clone()).unwrap().triangulate().unwrap();
    assert_eq!(tri.len(), 14);
    assert!((tri.area - shoelace(&pts)).abs() < 1e-12);
    assert_all_ccw(&pts, &tri);
}

#[test]
fn straight_vertex_is_kept_until_it_bends() {
    let pts = ring(&[(0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let mut decisions = Vec::new();
    let tri = Polygon::new(pts)
        .unwrap()
        .triangulate_traced(&mut |s: &EarStep<'_>| decisions.push(s.decision))
        .unwrap();
    assert_eq!(tri.len(), 3);
    assert!((tri.area - 1.0).abs() < 1e-12);
    assert!(matches!(decisions[0], EarDecision::Reflex { .. }));
}

#[test]
fn folded_vertex_is_clipped_without_triangle() {
    // (0, 2) folds back onto the top edge
    let pts = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.5, 2.0)]);
    let poly = Polygon::new(pts).unwrap();
    assert_eq!(poly.winding(), Winding::CounterClockwise);
    let mut steps = Vec::new();
    let tri = poly
        .triangulate_traced(&mut |s: &EarStep<'_>| steps.push((s.current, s.decision)))
        .unwrap();
    assert_eq!(tri.triangles, vec![[0, 1, 2], [2, 4, 0]]);
    assert!((tri.area - 3.5).abs() < 1e-12);
    assert_eq!(
        steps,
        vec![
            (1, EarDecision::Accepted),
            (2, EarDecision::Occupied { vertex: 4 }),
            (3, EarDecision::Degenerate),
            (4, EarDecision::Final),
        ]
    );
}

#[test]
fn unknown_winding_gives_empty_result() {
    let pts = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let orient = OrientCfg {
        interior_hi: 2.0,
        interior_lo: -1.0,
        ..OrientCfg::default()
    };
    let poly = Polygon::with_cfg(pts, GeomCfg::default(), orient).unwrap();
    assert_eq!(poly.winding(), Winding::Unknown);
    let tri = poly.triangulate().unwrap();
    assert!(tri.is_empty());
    assert_eq!(tri.area, 0.0);
}

#[test]
fn wrong_winding_reports_no_ear() {
    let pts = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let mut sink = NoTrace;
    let err = EarClipper::new(&pts, Winding::Clockwise, GeomCfg::default(), &mut sink)
        .run()
        .unwrap_err();
    assert_eq!(err, TriangulateError::NoEar { remaining: 4 });
    assert!(err.to_string().contains("no valid ear"));
}

#[test]
fn trace_does_not_change_result() {
    let pts = star(6, 2.0, 0.7);
    let poly = Polygon::new(pts).unwrap();
    let plain = poly.triangulate().unwrap();

    let mut emitted = 0usize;
    let mut last_len = 0usize;
    let traced = poly
        .triangulate_traced(&mut |s: &EarStep<'_>| {
            if s.decision.emits_triangle() {
                emitted += 1;
            }
            last_len = s.triangles.len();
            assert_eq!(s.clipped.len(), 12);
        })
        .unwrap();
    assert_eq!(plain, traced);
    assert_eq!(emitted, traced.len());
    assert_eq!(last_len, traced.len());
}

#[test]
fn regular_polygons_scale() {
    for n in [10usize, 40, 160, 640] {
        let pts = close_ring(place_points_around_circle(1.0, n));
        let tri = Polygon::new(pts.clone()).unwrap().triangulate().unwrap();
        assert_eq!(tri.len(), n - 2);
        assert!((tri.area - shoelace(&pts)).abs() < 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn generated_polygons_triangulate_fully(seed in 0u64..10_000, n in 8usize..48) {
        let cfg = CircleJitterCfg { vertex_count: n, rounds: 20, ..CircleJitterCfg::default() };
        let pts = draw_polygon(cfg, seed);
        let poly = Polygon::new(pts.clone()).unwrap();
        prop_assert!(poly.winding().is_known());

        let mut diagonals = Vec::new();
        let tri = poly
            .triangulate_traced(&mut |s: &EarStep<'_>| {
                if s.decision == EarDecision::Accepted {
                    diagonals.push((s.prev, s.next));
                }
            })
            .unwrap();

        prop_assert_eq!(tri.len(), n - 2);
        let expected = shoelace(&pts);
        prop_assert!((tri.area - expected).abs() < 1e-9 * expected.max(1.0));

        for (a, b) in diagonals {
            for j in 0..n {
                let k = j + 1;
                let shared = [j, k % n].iter().any(|&v| v == a || v == b);
                if shared {
                    continue;
                }
                prop_assert!(
                    !does_intersect(pts[a], pts[b], pts[j], pts[k], LineKind::Segment, true),
                    "diagonal ({}, {}) crosses edge ({}, {})", a, b, j, k
                );
            }
        }
    }
}
