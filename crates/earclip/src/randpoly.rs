//! Random simple polygons (regular polygon + bounded vertex jitter).
//!
//! Model
//! - Place `n` points on a circle at increasing angle (counter-clockwise).
//! - For `rounds` passes, move each vertex in a random direction by a random
//!   distance up to `max_step`; a move is kept only if neither new edge
//!   touches a non-adjacent edge, so the ring stays simple.
//! - Determinism: everything is driven by one `StdRng` seeded from `seed`.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{does_intersect, LineKind, Point};

/// Generator configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleJitterCfg {
    pub vertex_count: usize,
    pub radius: f64,
    /// Upper bound of a single vertex move.
    pub max_step: f64,
    /// Jitter passes over all vertices; 0 keeps the regular polygon.
    pub rounds: usize,
}

impl Default for CircleJitterCfg {
    fn default() -> Self {
        Self {
            vertex_count: 40,
            radius: 50.0,
            max_step: 10.0,
            rounds: 40,
        }
    }
}

/// `count` points evenly spaced on a circle, counter-clockwise, ring left open.
pub fn place_points_around_circle(radius: f64, count: usize) -> Vec<Point> {
    let inc = TAU / count as f64;
    (0..count)
        .map(|k| {
            let th = k as f64 * inc;
            Vector2::new(radius * th.cos(), radius * th.sin())
        })
        .collect()
}

/// Jitter an open ring in place. Returns the number of accepted moves.
pub fn move_points_randomly<R: Rng + ?Sized>(
    points: &mut [Point],
    max_distance: f64,
    rounds: usize,
    rng: &mut R,
) -> usize {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut accepted = 0;
    for _ in 0..rounds {
        for i in 0..n {
            let th = rng.gen::<f64>() * TAU;
            let dist = rng.gen::<f64>() * max_distance;
            let moved = points[i] + Vector2::new(dist * th.cos(), dist * th.sin());
            if breaks_simplicity(points, i, moved) {
                continue;
            }
            points[i] = moved;
            accepted += 1;
        }
    }
    accepted
}

/// Would replacing vertex `i` by `moved` make an edge touch a non-adjacent one?
fn breaks_simplicity(points: &[Point], i: usize, moved: Point) -> bool {
    let n = points.len();
    let prev = (i + n - 1) % n;
    let next = (i + 1) % n;
    let (p_prev, p_next) = (points[prev], points[next]);
    for j in 0..n {
        if j == prev || j == i {
            // the two edges being replaced
            continue;
        }
        let k = (j + 1) % n;
        let (r, s) = (points[j], points[k]);
        // edges sharing a vertex with a new edge can only meet it there
        if k != prev && does_intersect(p_prev, moved, r, s, LineKind::Segment, false) {
            return true;
        }
        if j != next && does_intersect(moved, p_next, r, s, LineKind::Segment, false) {
            return true;
        }
    }
    false
}

/// Append the first point if the ring is open.
pub fn close_ring(mut points: Vec<Point>) -> Vec<Point> {
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if points.len() == 1 || first != last {
            points.push(first);
        }
    }
    points
}

/// Draw one closed simple polygon.
pub fn draw_polygon(cfg: CircleJitterCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = place_points_around_circle(cfg.radius, cfg.vertex_count.max(3));
    let accepted = move_points_randomly(&mut points, cfg.max_step, cfg.rounds, &mut rng);
    tracing::debug!(
        vertices = points.len(),
        accepted,
        seed,
        "random polygon drawn"
    );
    close_ring(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orient::Winding;
    use crate::polygon::Polygon;

    /// No two non-adjacent edges of the closed ring touch.
    fn is_simple(ring: &[Point]) -> bool {
        let n = ring.len() - 1;
        for a in 0..n {
            for b in (a + 1)..n {
                let adjacent = b == a + 1 || (a == 0 && b == n - 1);
                if adjacent {
                    continue;
                }
                let hit = does_intersect(
                    ring[a],
                    ring[a + 1],
                    ring[b],
                    ring[b + 1],
                    LineKind::Segment,
                    false,
                );
                if hit {
                    return false;
                }
            }
        }
        true
    }

    fn shoelace(ring: &[Point]) -> f64 {
        ring.windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
            * 0.5
    }

    #[test]
    fn simplicity_check_ignores_shared_vertices() {
        let square = close_ring(place_points_around_circle(1.0, 4));
        assert!(is_simple(&square));
        let bowtie = close_ring(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        ]);
        assert!(!is_simple(&bowtie));
        let touching = close_ring(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 2.0),
        ]);
        assert!(!is_simple(&touching));
    }

    #[test]
    fn seed_three_is_simple_and_triangulates() {
        let ring = draw_polygon(CircleJitterCfg::default(), 3);
        assert!(is_simple(&ring));
        let area = shoelace(&ring);
        let tri = Polygon::new(ring).unwrap().triangulate().unwrap();
        assert_eq!(tri.len(), 38);
        assert!((tri.area - area).abs() < 1e-9 * area.max(1.0));
    }

    #[test]
    fn moves_next_to_shared_vertices_are_accepted() {
        let square = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];
        // pushing a corner outward keeps the ring simple
        assert!(!breaks_simplicity(&square, 2, Vector2::new(1.3, 1.2)));
        // pulling it across the opposite edges does not
        assert!(breaks_simplicity(&square, 2, Vector2::new(0.5, -0.5)));
    }

    #[test]
    fn regular_polygon_without_jitter() {
        let cfg = CircleJitterCfg {
            vertex_count: 10,
            radius: 2.0,
            rounds: 0,
            ..CircleJitterCfg::default()
        };
        let ring = draw_polygon(cfg, 1);
        assert_eq!(ring.len(), 11);
        assert_eq!(ring[0], ring[10]);
        for p in &ring {
            assert!((p.norm() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn reproducible_by_seed() {
        let cfg = CircleJitterCfg::default();
        assert_eq!(draw_polygon(cfg, 7), draw_polygon(cfg, 7));
        assert_ne!(draw_polygon(cfg, 7), draw_polygon(cfg, 8));
    }

    #[test]
    fn jittered_rings_stay_simple() {
        for seed in 0..10 {
            let ring = draw_polygon(CircleJitterCfg::default(), seed);
            assert_eq!(ring.len(), 41);
            assert!(is_simple(&ring), "seed {seed} produced a self-intersection");
        }
    }

    #[test]
    fn generated_rings_are_counter_clockwise() {
        for seed in 0..5 {
            let ring = draw_polygon(CircleJitterCfg::default(), seed);
            let poly = Polygon::new(ring).unwrap();
            assert_eq!(poly.winding(), Winding::CounterClockwise);
        }
    }

    #[test]
    fn close_ring_is_idempotent() {
        let open = place_points_around_circle(1.0, 4);
        let closed = close_ring(open);
        assert_eq!(closed.len(), 5);
        assert_eq!(close_ring(closed.clone()), closed);
        assert!(close_ring(Vec::new()).is_empty());
    }

    #[test]
    fn moves_are_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = place_points_around_circle(50.0, 20);
        let mut pts = start.clone();
        move_points_randomly(&mut pts, 1.0, 1, &mut rng);
        for (a, b) in start.iter().zip(&pts) {
            assert!((a - b).norm() <= 1.0 + 1e-9);
        }
    }
}
