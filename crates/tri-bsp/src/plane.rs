//! Plane representation and point classification.
//!
//! Planes are kept in exact integer form: an anchor point plus the
//! unnormalized normal `(p1 - p0) × (p2 - p0)`. Classification is the sign of
//! an integer dot product, so there is no epsilon.
//!
//! Coordinates are `i64` but every product is taken in `i128`. With all
//! coordinates within [`MAX_COORDINATE`] the normal, the dot products and the
//! barycentric terms built from them cannot overflow.

use nalgebra::{Point3, Vector3};

/// Largest coordinate magnitude the exact arithmetic supports.
///
/// The reader rejects anything larger with
/// [`BspError::CoordinateOutOfRange`](crate::BspError::CoordinateOutOfRange).
pub const MAX_COORDINATE: i64 = 1 << 29;

/// `to - from`, widened to `i128`.
#[inline]
pub(crate) fn offset(from: Point3<i64>, to: Point3<i64>) -> Vector3<i128> {
    to.coords.map(i128::from) - from.coords.map(i128::from)
}

/// `numerator / denominator` rounded to the nearest integer, halves away
/// from zero. `denominator` must be positive.
fn div_round(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if 2 * remainder.abs() >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Point is in front of the plane (positive side of normal)
    Front,
    /// Point is behind the plane (negative side of normal)
    Back,
    /// Point lies exactly on the plane
    OnPlane,
}

impl PlaneSide {
    /// Returns `+1`, `-1` or `0` for `Front`, `Back` and `OnPlane`.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            PlaneSide::Front => 1,
            PlaneSide::Back => -1,
            PlaneSide::OnPlane => 0,
        }
    }

    fn from_dot(dot: i128) -> Self {
        match dot.signum() {
            1 => PlaneSide::Front,
            -1 => PlaneSide::Back,
            _ => PlaneSide::OnPlane,
        }
    }
}

/// Classification of a triangle relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No vertex is behind the plane and at least one is in front
    Front,
    /// No vertex is in front of the plane and at least one is behind
    Back,
    /// All vertices are on the plane
    Coplanar,
    /// Vertices on both sides
    Spanning,
}

/// A plane in 3D space: an anchor point and an integer normal.
///
/// Two planes through the same point with anti-parallel normals compare as
/// different values; no canonicalization is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plane {
    point: Point3<i64>,
    normal: Vector3<i128>,
}

impl Plane {
    /// Creates a plane from an anchor point and a normal vector.
    pub fn new(point: Point3<i64>, normal: Vector3<i128>) -> Self {
        Self { point, normal }
    }

    /// Creates the plane through three points.
    ///
    /// The anchor is `a` and the normal follows the right-hand rule:
    /// `(b - a) × (c - a)`. Collinear points give a zero normal; no error is
    /// raised, see [`Plane::is_degenerate`].
    pub fn from_three_points(a: Point3<i64>, b: Point3<i64>, c: Point3<i64>) -> Self {
        let ab = offset(a, b);
        let ac = offset(a, c);
        Self::new(a, ab.cross(&ac))
    }

    /// Returns the anchor point.
    #[inline]
    pub fn point(&self) -> Point3<i64> {
        self.point
    }

    /// Returns the (unnormalized) normal vector.
    #[inline]
    pub fn normal(&self) -> Vector3<i128> {
        self.normal
    }

    /// Returns `true` if the normal is the zero vector.
    ///
    /// Every point classifies as [`PlaneSide::OnPlane`] against such a plane.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vector3::zeros()
    }

    /// Dot product of the normal with `point - anchor`.
    #[inline]
    pub fn side_value(&self, point: Point3<i64>) -> i128 {
        self.normal.dot(&offset(self.point, point))
    }

    /// Classifies which side of the plane a point lies on.
    #[inline]
    pub fn classify_point(&self, point: Point3<i64>) -> PlaneSide {
        PlaneSide::from_dot(self.side_value(point))
    }

    /// Computes where the segment `start..end` crosses the plane.
    ///
    /// Returns `Some((t, point))` where:
    /// - `t` is the interpolation parameter (0.0 = start, 1.0 = end)
    /// - `point` is the crossing, rounded to the nearest integer coordinates
    ///   (halves away from zero)
    ///
    /// Returns `None` if the segment is parallel to the plane or the crossing
    /// lies outside the segment.
    pub fn intersect_segment(
        &self,
        start: Point3<i64>,
        end: Point3<i64>,
    ) -> Option<(f64, Point3<i64>)> {
        let direction = offset(start, end);
        let denom = self.normal.dot(&direction);

        if denom == 0 {
            return None;
        }

        // t = num / denom, kept as an exact fraction with a positive denominator.
        let num = self.normal.dot(&offset(start, self.point));
        let (num, denom) = if denom < 0 { (-num, -denom) } else { (num, denom) };

        if num < 0 || num > denom {
            return None;
        }

        let step = direction.map(|d| div_round(num * d, denom) as i64);
        Some((num as f64 / denom as f64, start + step))
    }
}
