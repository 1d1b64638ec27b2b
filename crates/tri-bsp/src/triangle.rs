//! Indexed triangles and their resolved vertex form.

use nalgebra::Point3;

use crate::{BspError, Classification, Plane, PlaneSide};

/// A triangle given as three 1-based indices into a shared point array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    /// Creates a triangle from three 1-based vertex indices.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three 1-based vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Looks up the vertices of this triangle.
    ///
    /// `id` is the 1-based position of the triangle in its input list and is
    /// only used to label the result and any error.
    ///
    /// # Errors
    /// Returns [`BspError::InvalidTriangleIndex`] if an index is 0 or greater
    /// than `points.len()`.
    pub fn resolve(&self, id: usize, points: &[Point3<i64>]) -> Result<ResolvedTriangle, BspError> {
        let mut vertices = [Point3::origin(); 3];
        for (vertex, index) in vertices.iter_mut().zip(self.indices()) {
            *vertex = index
                .checked_sub(1)
                .and_then(|i| points.get(i))
                .copied()
                .ok_or(BspError::InvalidTriangleIndex {
                    triangle: id,
                    index,
                    point_count: points.len(),
                })?;
        }
        Ok(ResolvedTriangle::new(id, vertices))
    }
}

/// A triangle with its vertices looked up, tagged with its 1-based id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTriangle {
    id: usize,
    vertices: [Point3<i64>; 3],
}

impl ResolvedTriangle {
    /// Creates a resolved triangle from its id and vertices.
    ///
    /// The winding order determines the normal direction via the right-hand rule:
    /// normal = (b - a) × (c - a)
    pub fn new(id: usize, vertices: [Point3<i64>; 3]) -> Self {
        Self { id, vertices }
    }

    /// Returns the 1-based id of the triangle.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point3<i64>; 3] {
        &self.vertices
    }

    /// Returns the plane that this triangle lies on.
    ///
    /// The plane is degenerate when the vertices are collinear or repeated.
    pub fn plane(&self) -> Plane {
        let [a, b, c] = self.vertices;
        Plane::from_three_points(a, b, c)
    }

    /// Returns `true` if the triangle has zero area.
    pub fn is_degenerate(&self) -> bool {
        self.plane().is_degenerate()
    }

    /// Classifies this triangle relative to a plane.
    ///
    /// Returns:
    /// - `Coplanar` if all vertices lie on the plane
    /// - `Front` if no vertex is behind the plane
    /// - `Back` if no vertex is in front of the plane
    /// - `Spanning` if vertices are on both sides
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = 0;
        let mut back = 0;

        for vertex in &self.vertices {
            match plane.classify_point(*vertex) {
                PlaneSide::Front => front += 1,
                PlaneSide::Back => back += 1,
                PlaneSide::OnPlane => {}
            }
        }

        match (front, back) {
            (0, 0) => Classification::Coplanar,
            (_, 0) => Classification::Front,
            (0, _) => Classification::Back,
            _ => Classification::Spanning,
        }
    }
}
