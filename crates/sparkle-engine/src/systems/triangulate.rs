//! Exhaustive proximity triangulation over the point set.
//!
//! Every ordered triple of distinct points is considered, so each qualifying
//! triangle is visited once per vertex ordering. The overdraw is part of the
//! look: translucent strokes stack up where points cluster.

use glam::DVec2;

use crate::core::point::Point;

/// A triangle whose three edges are all within the distance threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub corners: [DVec2; 3],
    /// `1 - longest_edge / threshold`, in [0, 1].
    pub intensity: f64,
}

/// Intensity for a triple, or `None` if any edge exceeds `threshold`.
pub fn triangle_intensity(a: DVec2, b: DVec2, c: DVec2, threshold: f64) -> Option<f64> {
    let ab = a.distance(b);
    let ac = a.distance(c);
    let bc = b.distance(c);
    if ab > threshold || ac > threshold || bc > threshold {
        return None;
    }
    Some(1.0 - ab.max(ac).max(bc) / threshold)
}

/// Call `visit` for every qualifying ordered triple. Returns how many were visited.
///
/// O(n³) in the worst case; the AB and AC checks prune before the innermost
/// distance is computed.
pub fn for_each_triangle(points: &[Point], threshold: f64, mut visit: impl FnMut(Triangle)) -> usize {
    let mut count = 0;
    for (i, a) in points.iter().enumerate() {
        let a = a.position;
        for (j, b) in points.iter().enumerate() {
            if j == i {
                continue;
            }
            let b = b.position;
            let ab = a.distance(b);
            if ab > threshold {
                continue;
            }
            for (k, c) in points.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                let c = c.position;
                let ac = a.distance(c);
                if ac > threshold {
                    continue;
                }
                let bc = b.distance(c);
                if bc > threshold {
                    continue;
                }
                let longest = ab.max(ac).max(bc);
                visit(Triangle {
                    corners: [a, b, c],
                    intensity: 1.0 - longest / threshold,
                });
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> Point {
        Point::new(x, y, 0.0, 0.0)
    }

    /// Sides AB = 10, AC = 20, BC = 15.
    fn small_triangle() -> Vec<Point> {
        let cx = 13.75;
        let cy = (400.0f64 - cx * cx).sqrt();
        vec![at(0.0, 0.0), at(10.0, 0.0), at(cx, cy)]
    }

    #[test]
    fn intensity_uses_longest_edge() {
        let pts = small_triangle();
        let intensity = triangle_intensity(pts[0].position, pts[1].position, pts[2].position, 100.0)
            .unwrap();
        assert!((intensity - 0.8).abs() < 1e-9, "intensity was {}", intensity);
    }

    #[test]
    fn visits_every_ordering_once() {
        let mut seen = Vec::new();
        let count = for_each_triangle(&small_triangle(), 100.0, |t| seen.push(t));
        assert_eq!(count, 6);
        assert_eq!(seen.len(), 6);
        for t in &seen {
            assert!((t.intensity - 0.8).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_triple_with_one_long_edge() {
        // AB = 50, AC = 60.5, BC = 110.5
        let pts = vec![at(0.0, 0.0), at(50.0, 0.0), at(-60.5, 0.0)];
        let count = for_each_triangle(&pts, 110.0, |_| panic!("nothing should be drawn"));
        assert_eq!(count, 0);
        assert_eq!(triangle_intensity(pts[0].position, pts[1].position, pts[2].position, 110.0), None);
    }

    #[test]
    fn edge_exactly_at_threshold_is_kept() {
        let pts = vec![at(0.0, 0.0), at(50.0, 0.0), at(-60.0, 0.0)];
        let mut intensities = Vec::new();
        for_each_triangle(&pts, 110.0, |t| intensities.push(t.intensity));
        assert_eq!(intensities.len(), 6);
        assert!(intensities.iter().all(|&i| i.abs() < 1e-12));
    }

    #[test]
    fn fewer_than_three_points_draw_nothing() {
        assert_eq!(for_each_triangle(&[], 100.0, |_| {}), 0);
        assert_eq!(for_each_triangle(&[at(0.0, 0.0), at(1.0, 1.0)], 100.0, |_| {}), 0);
    }

    #[test]
    fn coincident_points_are_tolerated() {
        let pts = vec![at(5.0, 5.0), at(5.0, 5.0), at(5.0, 5.0)];
        let mut visited = Vec::new();
        for_each_triangle(&pts, 100.0, |t| visited.push(t));
        assert_eq!(visited.len(), 6);
        assert!(visited.iter().all(|t| t.intensity == 1.0));
    }

    #[test]
    fn only_close_cluster_forms_triangles() {
        let pts = vec![
            at(0.0, 0.0),
            at(5.0, 0.0),
            at(0.0, 5.0),
            at(500.0, 500.0),
        ];
        let mut touched_far = false;
        let count = for_each_triangle(&pts, 50.0, |t| {
            touched_far |= t.corners.iter().any(|c| c.x > 100.0);
        });
        assert_eq!(count, 6);
        assert!(!touched_far);
    }
}
