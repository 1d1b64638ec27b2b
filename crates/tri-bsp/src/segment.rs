//! Line segments and the segment-triangle intersection test.

use nalgebra::Point3;

use crate::planar::{DroppedAxis, point_in_triangle, segments_intersect};
use crate::plane::offset;
use crate::{Plane, PlaneSide, ResolvedTriangle};

/// A directed segment between two points in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point3<i64>,
    pub end: Point3<i64>,
}

impl Segment {
    /// Creates a segment from its two endpoints.
    pub fn new(start: Point3<i64>, end: Point3<i64>) -> Self {
        Self { start, end }
    }

    /// Returns `true` if this segment touches the given triangle.
    ///
    /// See [`segment_intersects_triangle`].
    pub fn intersects_triangle(&self, triangle: &ResolvedTriangle) -> bool {
        segment_intersects_triangle(self.start, self.end, triangle.vertices())
    }
}

/// Tests whether segment `a..b` touches triangle `vertices`.
///
/// When the segment is not parallel to the triangle's plane, the crossing
/// point is rounded to integer coordinates before the barycentric containment
/// test, so crossings within half a unit of an edge may be misreported.
/// Segments lying in the plane are tested in 2D after dropping the dominant
/// axis of the normal. Degenerate (zero-area) triangles never intersect.
pub fn segment_intersects_triangle(
    a: Point3<i64>,
    b: Point3<i64>,
    vertices: &[Point3<i64>; 3],
) -> bool {
    let [p0, p1, p2] = *vertices;
    let plane = Plane::from_three_points(p0, p1, p2);
    if plane.is_degenerate() {
        return false;
    }

    if plane.normal().dot(&offset(a, b)) != 0 {
        return match plane.intersect_segment(a, b) {
            Some((_, point)) => barycentric_contains(vertices, point),
            None => false,
        };
    }

    if plane.classify_point(a) != PlaneSide::OnPlane {
        return false;
    }

    coplanar_intersects(a, b, vertices, &plane)
}

/// Barycentric test `u, v >= 0 && u + v <= 1`, evaluated without division.
fn barycentric_contains(vertices: &[Point3<i64>; 3], point: Point3<i64>) -> bool {
    let [p0, p1, p2] = *vertices;
    let v0 = offset(p0, p1);
    let v1 = offset(p0, p2);
    let v2 = offset(p0, point);

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    // Gram determinant: never negative, zero only for a degenerate triangle.
    let denom = d00 * d11 - d01 * d01;
    if denom == 0 {
        return false;
    }

    let u = d11 * d20 - d01 * d21;
    let v = d00 * d21 - d01 * d20;
    u >= 0 && v >= 0 && u + v <= denom
}

fn coplanar_intersects(
    a: Point3<i64>,
    b: Point3<i64>,
    vertices: &[Point3<i64>; 3],
    plane: &Plane,
) -> bool {
    let axis = DroppedAxis::for_normal(plane.normal());
    let a2 = axis.project(a);
    let b2 = axis.project(b);
    let [t0, t1, t2] = vertices.map(|v| axis.project(v));

    point_in_triangle(a2, t0, t1, t2)
        || point_in_triangle(b2, t0, t1, t2)
        || segments_intersect(a2, b2, t0, t1)
        || segments_intersect(a2, b2, t1, t2)
        || segments_intersect(a2, b2, t2, t0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i64, y: i64, z: i64) -> Point3<i64> {
        Point3::new(x, y, z)
    }

    fn big_triangle() -> [Point3<i64>; 3] {
        [pt(0, 0, 0), pt(6, 0, 0), pt(0, 6, 0)]
    }

    #[test]
    fn crossing_segment_hits() {
        assert!(segment_intersects_triangle(pt(1, 1, -3), pt(1, 1, 3), &big_triangle()));
        // Winding does not matter.
        let [a, b, c] = big_triangle();
        assert!(segment_intersects_triangle(pt(1, 1, 3), pt(1, 1, -3), &[a, c, b]));
    }

    #[test]
    fn crossing_outside_triangle_misses() {
        assert!(!segment_intersects_triangle(pt(5, 5, -3), pt(5, 5, 3), &big_triangle()));
    }

    #[test]
    fn segment_stopping_short_misses() {
        assert!(!segment_intersects_triangle(pt(1, 1, 1), pt(1, 1, 5), &big_triangle()));
        assert!(!segment_intersects_triangle(pt(1, 1, -5), pt(1, 1, -1), &big_triangle()));
    }

    #[test]
    fn endpoint_on_triangle_hits() {
        assert!(segment_intersects_triangle(pt(2, 2, 0), pt(2, 2, 7), &big_triangle()));
    }

    #[test]
    fn crossing_point_is_rounded_before_containment() {
        let triangle = [pt(0, 0, 0), pt(10, 0, 0), pt(0, 10, 0)];
        // Exact crossing (3, -0.4, 0) is outside; rounded (3, 0, 0) is on the edge.
        assert!(segment_intersects_triangle(pt(3, 0, -2), pt(3, -1, 3), &triangle));
        // Exact crossing (3, -0.6, 0) rounds to (3, -1, 0).
        assert!(!segment_intersects_triangle(pt(3, -1, -2), pt(3, 0, 3), &triangle));
    }

    #[test]
    fn coplanar_segment_inside_triangle() {
        let (a, b) = (pt(1, 1, 0), pt(2, 1, 0));
        let plane = Plane::from_three_points(pt(0, 0, 0), pt(6, 0, 0), pt(0, 6, 0));
        // The 3D line-plane solver cannot see this case.
        assert!(plane.intersect_segment(a, b).is_none());
        assert!(segment_intersects_triangle(a, b, &big_triangle()));
    }

    #[test]
    fn coplanar_segment_crossing_edges() {
        assert!(segment_intersects_triangle(pt(-1, 2, 0), pt(8, 2, 0), &big_triangle()));
    }

    #[test]
    fn coplanar_segment_outside_triangle() {
        assert!(!segment_intersects_triangle(pt(5, 5, 0), pt(9, 5, 0), &big_triangle()));
    }

    #[test]
    fn parallel_segment_off_plane_misses() {
        assert!(!segment_intersects_triangle(pt(1, 1, 1), pt(2, 1, 1), &big_triangle()));
    }

    #[test]
    fn coplanar_in_tilted_plane() {
        // Plane x = y; the normal has equal x and y magnitude.
        let triangle = [pt(0, 0, 0), pt(4, 4, 0), pt(0, 0, 4)];
        assert!(segment_intersects_triangle(pt(1, 1, 1), pt(1, 1, 2), &triangle));
        assert!(!segment_intersects_triangle(pt(5, 5, 5), pt(6, 6, 6), &triangle));
    }

    #[test]
    fn degenerate_triangle_never_intersects() {
        let line = [pt(0, 0, 0), pt(2, 2, 2), pt(4, 4, 4)];
        assert!(!segment_intersects_triangle(pt(1, 1, 1), pt(3, 3, 3), &line));
        assert!(!segment_intersects_triangle(pt(2, 2, -1), pt(2, 2, 5), &line));
    }

    #[test]
    fn crossing_with_coordinates_in_the_millions() {
        let triangle = [pt(0, 0, 0), pt(3_000_000, 0, 0), pt(0, 3_000_000, 0)];
        assert!(segment_intersects_triangle(
            pt(1, 1, -1_000_000),
            pt(1, 1, 1_000_000),
            &triangle
        ));
        assert!(!segment_intersects_triangle(
            pt(2_000_000, 2_000_000, -1_000_000),
            pt(2_000_000, 2_000_000, 1_000_000),
            &triangle
        ));
    }

    #[test]
    fn crossing_at_coordinate_limit() {
        let m = crate::MAX_COORDINATE;
        let triangle = [pt(-m, -m, 0), pt(m, -m, 0), pt(-m, m, 0)];
        assert!(segment_intersects_triangle(pt(-1, -1, -m), pt(-1, -1, m), &triangle));
        assert!(!segment_intersects_triangle(pt(1, 1, -m), pt(1, 1, m), &triangle));
        // Coplanar, crossing the hypotenuse.
        assert!(segment_intersects_triangle(pt(-m, -m, 0), pt(m, m, 0), &triangle));
    }

    #[test]
    fn segment_method_uses_triangle_vertices() {
        let triangle = ResolvedTriangle::new(1, big_triangle());
        let segment = Segment::new(pt(1, 1, -3), pt(1, 1, 3));
        assert!(segment.intersects_triangle(&triangle));
    }
}
