//! 2D predicates used when a segment lies in a triangle's plane.
//!
//! Coplanar geometry is projected onto an axis-aligned plane by dropping the
//! coordinate where the normal is largest, then tested with exact integer
//! orientation checks. Products are taken in `i128`.

use nalgebra::{Point2, Point3, Vector3};

/// Turn direction of an ordered triple of 2D points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

#[inline]
fn widen(point: Point2<i64>) -> Point2<i128> {
    point.map(i128::from)
}

/// Returns the orientation of the triple `(p, q, r)`.
pub fn orientation(p: Point2<i64>, q: Point2<i64>, r: Point2<i64>) -> Orientation {
    let [p, q, r] = [p, q, r].map(widen);
    let value = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    match value.signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Returns `true` if `q` lies within the bounding box of `p` and `r`.
///
/// Only meaningful when the three points are already known to be collinear.
pub fn on_segment(p: Point2<i64>, q: Point2<i64>, r: Point2<i64>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Returns `true` if segment `p1..q1` and segment `p2..q2` share a point.
///
/// Touching endpoints and collinear overlap count as intersections.
pub fn segments_intersect(
    p1: Point2<i64>,
    q1: Point2<i64>,
    p2: Point2<i64>,
    q2: Point2<i64>,
) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

fn signed_area(p: Point2<i64>, a: Point2<i64>, b: Point2<i64>) -> i128 {
    let [p, a, b] = [p, a, b].map(widen);
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Returns `true` if `p` lies inside triangle `abc` or on its boundary.
///
/// Works for either winding: the point is inside when the three signed areas
/// do not disagree in sign.
pub fn point_in_triangle(p: Point2<i64>, a: Point2<i64>, b: Point2<i64>, c: Point2<i64>) -> bool {
    let d1 = signed_area(p, a, b);
    let d2 = signed_area(p, b, c);
    let d3 = signed_area(p, c, a);

    let has_negative = d1 < 0 || d2 < 0 || d3 < 0;
    let has_positive = d1 > 0 || d2 > 0 || d3 > 0;

    !(has_negative && has_positive)
}

/// The coordinate discarded when projecting 3D points to 2D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroppedAxis {
    X,
    Y,
    Z,
}

impl DroppedAxis {
    /// Picks the axis along which `normal` is largest in magnitude.
    ///
    /// `X` wins ties with `Y`, and `Z` is only picked when strictly larger
    /// than both.
    pub fn for_normal(normal: Vector3<i128>) -> Self {
        let (nx, ny, nz) = (normal.x.abs(), normal.y.abs(), normal.z.abs());
        let mut axis = DroppedAxis::X;
        if ny > nx {
            axis = DroppedAxis::Y;
        }
        if nz > nx && nz > ny {
            axis = DroppedAxis::Z;
        }
        axis
    }

    /// Projects a point by removing this coordinate.
    #[inline]
    pub fn project(self, point: Point3<i64>) -> Point2<i64> {
        match self {
            DroppedAxis::X => Point2::new(point.y, point.z),
            DroppedAxis::Y => Point2::new(point.x, point.z),
            DroppedAxis::Z => Point2::new(point.x, point.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point2<i64> {
        Point2::new(x, y)
    }

    #[test]
    fn orientation_of_triples() {
        assert_eq!(orientation(p(0, 0), p(1, 1), p(2, 2)), Orientation::Collinear);
        assert_eq!(orientation(p(0, 0), p(0, 1), p(1, 1)), Orientation::Clockwise);
        assert_eq!(orientation(p(0, 0), p(1, 0), p(1, 1)), Orientation::CounterClockwise);
    }

    #[test]
    fn on_segment_uses_bounding_box() {
        assert!(on_segment(p(0, 0), p(2, 2), p(4, 4)));
        assert!(on_segment(p(4, 4), p(4, 4), p(0, 0)));
        assert!(!on_segment(p(0, 0), p(5, 5), p(4, 4)));
    }

    #[test]
    fn crossing_segments() {
        assert!(segments_intersect(p(0, 0), p(4, 4), p(0, 4), p(4, 0)));
        assert!(!segments_intersect(p(0, 0), p(1, 1), p(3, 0), p(4, -1)));
    }

    #[test]
    fn touching_endpoint_counts() {
        assert!(segments_intersect(p(0, 0), p(2, 0), p(2, 0), p(2, 5)));
        assert!(segments_intersect(p(0, 0), p(4, 0), p(2, 0), p(2, 5)));
    }

    #[test]
    fn collinear_segments() {
        assert!(segments_intersect(p(0, 0), p(4, 0), p(2, 0), p(6, 0)));
        assert!(segments_intersect(p(0, 0), p(6, 0), p(2, 0), p(3, 0)));
        assert!(!segments_intersect(p(0, 0), p(1, 0), p(2, 0), p(3, 0)));
    }

    #[test]
    fn parallel_segments_do_not_meet() {
        assert!(!segments_intersect(p(0, 0), p(4, 0), p(0, 1), p(4, 1)));
    }

    #[test]
    fn point_in_triangle_either_winding() {
        let (a, b, c) = (p(0, 0), p(6, 0), p(0, 6));
        assert!(point_in_triangle(p(1, 1), a, b, c));
        assert!(point_in_triangle(p(1, 1), a, c, b));
        assert!(point_in_triangle(p(3, 3), a, b, c));
        assert!(point_in_triangle(p(0, 0), a, b, c));
        assert!(!point_in_triangle(p(4, 4), a, b, c));
        assert!(!point_in_triangle(p(-1, 2), a, c, b));
    }

    #[test]
    fn predicates_at_extreme_coordinates() {
        let m = crate::MAX_COORDINATE;
        assert_eq!(orientation(p(-m, -m), p(m, m), p(-m, m)), Orientation::CounterClockwise);
        assert_eq!(orientation(p(-m, -m), p(m, m), p(0, 0)), Orientation::Collinear);
        assert!(segments_intersect(p(-m, -m), p(m, m), p(-m, m), p(m, -m)));
        assert!(point_in_triangle(p(m - 1, -m + 1), p(-m, -m), p(m, -m), p(m, m)));
        assert!(!point_in_triangle(p(-m, m), p(-m, -m), p(m, -m), p(m, m)));
    }

    #[test]
    fn dropped_axis_tie_breaks() {
        assert_eq!(DroppedAxis::for_normal(Vector3::new(0, 0, 5)), DroppedAxis::Z);
        assert_eq!(DroppedAxis::for_normal(Vector3::new(0, -3, 1)), DroppedAxis::Y);
        assert_eq!(DroppedAxis::for_normal(Vector3::new(2, 2, 0)), DroppedAxis::X);
        assert_eq!(DroppedAxis::for_normal(Vector3::new(1, 2, 2)), DroppedAxis::Y);
        assert_eq!(DroppedAxis::for_normal(Vector3::new(3, 0, 3)), DroppedAxis::X);
        assert_eq!(DroppedAxis::for_normal(Vector3::zeros()), DroppedAxis::X);
    }

    #[test]
    fn projection_drops_one_coordinate() {
        let point = Point3::new(1, 2, 3);
        assert_eq!(DroppedAxis::X.project(point), p(2, 3));
        assert_eq!(DroppedAxis::Y.project(point), p(1, 3));
        assert_eq!(DroppedAxis::Z.project(point), p(1, 2));
    }
}
