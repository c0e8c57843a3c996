//! 2D geometry helpers shared by collision and debug rendering.
//!
//! Everything here works on raylib's [`Vector2`] in screen space (Y grows
//! downwards). Polygons are slices of vertices in winding order; the last
//! vertex connects back to the first.

use raylib::prelude::Vector2;

/// Truncate both coordinates toward zero.
///
/// This is the single rounding rule used to derive hitbox centers. Collision
/// tests, sprite distances and the debug overlay all go through it so that
/// what is drawn is exactly what is tested.
#[inline]
pub fn snap(v: Vector2) -> Vector2 {
    Vector2 {
        x: v.x.trunc(),
        y: v.y.trunc(),
    }
}

/// Separating-axis test between two convex polygons.
///
/// Every edge normal of both polygons is tried as a candidate axis.
/// Zero-length edges are skipped. Touching polygons (projections sharing
/// an endpoint) count as overlapping.
pub fn sat_overlap(a: &[Vector2], b: &[Vector2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    for polygon in [a, b] {
        for i in 0..polygon.len() {
            let p1 = polygon[i];
            let p2 = polygon[(i + 1) % polygon.len()];
            let edge = Vector2 {
                x: p2.x - p1.x,
                y: p2.y - p1.y,
            };
            let normal = Vector2 {
                x: -edge.y,
                y: edge.x,
            };
            let length = (normal.x * normal.x + normal.y * normal.y).sqrt();
            if length == 0.0 {
                continue;
            }
            let axis = Vector2 {
                x: normal.x / length,
                y: normal.y / length,
            };

            let (min_a, max_a) = project(a, axis);
            let (min_b, max_b) = project(b, axis);
            if max_a < min_b || max_b < min_a {
                return false;
            }
        }
    }
    true
}

fn project(polygon: &[Vector2], axis: Vector2) -> (f32, f32) {
    polygon
        .iter()
        .map(|p| p.x * axis.x + p.y * axis.y)
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

/// Ray-casting point containment.
///
/// A horizontal ray is cast to the right of `point` and edge crossings are
/// counted. Points exactly on a vertical right edge count as inside.
pub fn point_in_polygon(point: Vector2, polygon: &[Vector2]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut p1 = polygon[0];
    for i in 1..=n {
        let p2 = polygon[i % n];
        if point.y > p1.y.min(p2.y) && point.y <= p1.y.max(p2.y) && point.x <= p1.x.max(p2.x) {
            if p1.x == p2.x {
                inside = !inside;
            } else {
                // p1.y != p2.y here: the strict/inclusive range check above
                // cannot pass for a horizontal edge.
                let x_cross = (point.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                if point.x <= x_cross {
                    inside = !inside;
                }
            }
        }
        p1 = p2;
    }
    inside
}

/// Shortest distance from `point` to the segment `a`-`b`.
///
/// A degenerate segment (`a == b`) is treated as a single point.
pub fn point_segment_distance(point: Vector2, a: Vector2, b: Vector2) -> f32 {
    let seg = Vector2 {
        x: b.x - a.x,
        y: b.y - a.y,
    };
    let to_point = Vector2 {
        x: point.x - a.x,
        y: point.y - a.y,
    };
    let len_sq = seg.x * seg.x + seg.y * seg.y;
    if len_sq == 0.0 {
        return distance(point, a);
    }

    let t = ((to_point.x * seg.x + to_point.y * seg.y) / len_sq).clamp(0.0, 1.0);
    let closest = Vector2 {
        x: a.x + t * seg.x,
        y: a.y + t * seg.y,
    };
    distance(point, closest)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Unit vector in the direction of `v`; the zero vector stays zero.
pub fn normalize(v: Vector2) -> Vector2 {
    let length = (v.x * v.x + v.y * v.y).sqrt();
    if length == 0.0 {
        return Vector2 { x: 0.0, y: 0.0 };
    }
    Vector2 {
        x: v.x / length,
        y: v.y / length,
    }
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t.clamp(0.0, 1.0)
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics; when `min > max` the result is `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Screen-space heading from `from` to `to` in degrees.
///
/// Y is flipped so that 0° points right and 90° points up on screen, the
/// same convention used by [`Rotation`](crate::components::rotation::Rotation).
#[inline]
pub fn heading_degrees(from: Vector2, to: Vector2) -> f32 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (-dy).atan2(dx).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn square(x: f32, y: f32, size: f32) -> Vec<Vector2> {
        vec![
            Vector2::new(x, y),
            Vector2::new(x + size, y),
            Vector2::new(x + size, y + size),
            Vector2::new(x, y + size),
        ]
    }

    #[test]
    fn test_snap_truncates_toward_zero() {
        let v = snap(Vector2::new(10.9, -3.7));
        assert!(approx_eq(v.x, 10.0));
        assert!(approx_eq(v.y, -3.0));
    }

    #[test]
    fn test_sat_overlapping_squares() {
        assert!(sat_overlap(&square(0.0, 0.0, 10.0), &square(5.0, 5.0, 10.0)));
    }

    #[test]
    fn test_sat_separated_squares() {
        assert!(!sat_overlap(&square(0.0, 0.0, 10.0), &square(20.0, 0.0, 10.0)));
    }

    #[test]
    fn test_sat_touching_edges_count_as_overlap() {
        assert!(sat_overlap(&square(0.0, 0.0, 10.0), &square(10.0, 0.0, 10.0)));
    }

    #[test]
    fn test_sat_diamond_gap_near_corner() {
        // The bounding boxes overlap near the square's top-right corner but
        // the diamond's lower-left edge (x - y = 11) clears the corner (10, 0).
        let diamond = vec![
            Vector2::new(12.5, -6.5),
            Vector2::new(16.5, -2.5),
            Vector2::new(12.5, 1.5),
            Vector2::new(8.5, -2.5),
        ];
        let sq = square(0.0, 0.0, 10.0);
        assert!(!sat_overlap(&sq, &diamond));
    }

    #[test]
    fn test_sat_skips_degenerate_edges() {
        let mut a = square(0.0, 0.0, 10.0);
        a.insert(1, Vector2::new(0.0, 0.0));
        assert!(sat_overlap(&a, &square(5.0, 5.0, 2.0)));
    }

    #[test]
    fn test_sat_empty_polygon_never_overlaps() {
        assert!(!sat_overlap(&[], &square(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_point_in_polygon_inside_and_outside() {
        let sq = square(0.0, 0.0, 10.0);
        assert!(point_in_polygon(Vector2::new(5.0, 5.0), &sq));
        assert!(!point_in_polygon(Vector2::new(15.0, 5.0), &sq));
        assert!(!point_in_polygon(Vector2::new(5.0, -1.0), &sq));
    }

    #[test]
    fn test_point_in_rotated_polygon() {
        let diamond = vec![
            Vector2::new(0.0, -10.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(0.0, 10.0),
            Vector2::new(-10.0, 0.0),
        ];
        assert!(point_in_polygon(Vector2::new(0.0, 0.0), &diamond));
        assert!(point_in_polygon(Vector2::new(4.0, 4.0), &diamond));
        assert!(!point_in_polygon(Vector2::new(8.0, 8.0), &diamond));
    }

    #[test]
    fn test_point_segment_distance_projects_inside() {
        let d = point_segment_distance(
            Vector2::new(5.0, 3.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
        );
        assert!(approx_eq(d, 3.0));
    }

    #[test]
    fn test_point_segment_distance_clamps_to_endpoint() {
        let d = point_segment_distance(
            Vector2::new(13.0, 4.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
        );
        assert!(approx_eq(d, 5.0));
    }

    #[test]
    fn test_point_segment_distance_degenerate_segment() {
        let d = point_segment_distance(
            Vector2::new(3.0, 4.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
        );
        assert!(approx_eq(d, 5.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = normalize(Vector2::new(0.0, 0.0));
        assert!(approx_eq(v.x, 0.0));
        assert!(approx_eq(v.y, 0.0));
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = normalize(Vector2::new(3.0, 4.0));
        assert!(approx_eq(v.x, 0.6));
        assert!(approx_eq(v.y, 0.8));
    }

    #[test]
    fn test_lerp_clamps_t() {
        assert!(approx_eq(lerp(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp(0.0, 10.0, 2.0), 10.0));
        assert!(approx_eq(lerp(0.0, 10.0, -1.0), 0.0));
    }

    #[test]
    fn test_clamp() {
        assert!(approx_eq(clamp(5.0, 0.0, 3.0), 3.0));
        assert!(approx_eq(clamp(-5.0, 0.0, 3.0), 0.0));
        assert!(approx_eq(clamp(1.0, 0.0, 3.0), 1.0));
    }

    #[test]
    fn test_heading_degrees_screen_up_is_90() {
        let h = heading_degrees(Vector2::new(0.0, 0.0), Vector2::new(0.0, -10.0));
        assert!(approx_eq(h, 90.0));
        let h = heading_degrees(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0));
        assert!(approx_eq(h, 0.0));
    }
}
