use crate::math::{vector_2d, Point2, TOLERANCE};

/// An ordered triple of vertices.
///
/// Orientation is derived from the edge determinant, never stored. Degenerate
/// (collinear or coincident) vertices are a boundary condition for the
/// constructions downstream, not a structural error, so creation never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub fn new(vertices: [Point2; 3]) -> Self {
        Self { vertices }
    }

    /// Creates a triangle from raw coordinate pairs, as supplied by a shell.
    #[must_use]
    pub fn from_coords(coords: [(f64, f64); 3]) -> Self {
        Self {
            vertices: coords.map(|(x, y)| Point2::new(x, y)),
        }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        self.vertices
    }

    /// Returns vertex `i`, indexed cyclically.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Point2 {
        self.vertices[i % 3]
    }

    /// Returns the side lengths `[|v0 v1|, |v1 v2|, |v2 v0|]`.
    #[must_use]
    pub fn side_lengths(&self) -> [f64; 3] {
        [0usize, 1, 2].map(|i| (self.vertex(i + 1) - self.vertex(i)).norm())
    }

    /// Computes the signed area (shoelace formula).
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let mut sum = 0.0;
        for i in 0..3 {
            let p = self.vertex(i);
            let q = self.vertex(i + 1);
            sum += p.x * q.y - q.x * p.y;
        }
        sum * 0.5
    }

    /// Returns whether the vertices are collinear or coincident.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let v1 = self.vertex(1) - self.vertex(0);
        let v2 = self.vertex(2) - self.vertex(0);
        vector_2d::determinant(&v1, &v2).abs() < TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_ccw_positive() {
        let t = Triangle::from_coords([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert!((t.signed_area() - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_negative() {
        let t = Triangle::from_coords([(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]);
        assert!((t.signed_area() + 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn side_lengths_of_345() {
        let t = Triangle::from_coords([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        let [c, a, b] = t.side_lengths();
        assert!((c - 4.0).abs() < TOLERANCE);
        assert!((a - 5.0).abs() < TOLERANCE);
        assert!((b - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn vertex_indexing_is_cyclic() {
        let t = Triangle::from_coords([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(t.vertex(3), t.vertex(0));
        assert_eq!(t.vertex(5), t.vertex(2));
    }

    #[test]
    fn collinear_is_degenerate() {
        let t = Triangle::from_coords([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(t.is_degenerate());
        assert!(t.signed_area().abs() < TOLERANCE);
    }

    #[test]
    fn coincident_is_degenerate() {
        let t = Triangle::from_coords([(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(t.is_degenerate());
    }

    #[test]
    fn proper_triangle_is_not_degenerate() {
        let t = Triangle::from_coords([(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert!(!t.is_degenerate());
    }
}
