use std::f64::consts::PI;

use crate::error::{MorleyError, Result};
use crate::geometry::Line;
use crate::math::{vector_2d, Point2, Vector2, TOLERANCE};

/// A ray stored as an origin point and an absolute direction angle.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point2,
    /// Direction angle, counter-clockwise from the +x axis.
    pub angle: f64,
}

impl Ray {
    /// Returns the unit direction vector of the ray.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        vector_2d::from_polar(1.0, self.angle)
    }

    /// Converts the ray to the infinite line carrying it.
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::from_unit(self.origin, self.direction())
    }
}

/// The interior-angle trisection at one triangle vertex.
///
/// `start_angle` is the absolute direction toward the first neighbor and
/// `extent` the signed interior angle: sweeping from `start_angle` by
/// `extent` reaches the second neighbor. The sign follows the determinant of
/// the two arm vectors (positive for a counter-clockwise sweep).
#[derive(Debug, Clone, Copy)]
pub struct VertexTrisection {
    /// The trisected vertex.
    pub vertex: Point2,
    /// Absolute direction toward the first neighbor.
    pub start_angle: f64,
    /// Signed interior angle.
    pub extent: f64,
    /// Interior trisectors; `rays[0]` is nearest the first neighbor.
    pub rays: [Ray; 2],
}

impl VertexTrisection {
    /// Absolute direction toward the second neighbor.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.extent
    }

    /// Signed extent of the supplementary exterior angle at this vertex.
    ///
    /// The exterior sweep runs opposite to the interior one.
    #[must_use]
    pub fn exterior_extent(&self) -> f64 {
        (PI - self.extent.abs()).copysign(-self.extent)
    }

    /// Trisectors of the two exterior angles at this vertex.
    ///
    /// `[0]` holds the rays beyond the first-neighbor arm, swept outward from
    /// `start_angle`; `[1]` those beyond the second-neighbor arm, swept
    /// outward from [`end_angle`](Self::end_angle). Within each pair, index 0
    /// is the ray nearest its arm.
    #[must_use]
    pub fn exterior_rays(&self) -> [[Ray; 2]; 2] {
        let ext = self.exterior_extent();
        let ray = |angle: f64| Ray {
            origin: self.vertex,
            angle,
        };
        [
            [
                ray(self.start_angle + ext / 3.0),
                ray(self.start_angle + ext * 2.0 / 3.0),
            ],
            [
                ray(self.end_angle() - ext / 3.0),
                ray(self.end_angle() - ext * 2.0 / 3.0),
            ],
        ]
    }
}

/// Trisects the interior angle at `vertex`, whose triangle neighbors are
/// `n1` and `n2`.
///
/// The sweep direction from `n1` to `n2` comes from the determinant of the
/// two arm vectors, so the trisectors land inside the angle for either
/// winding of the triangle.
///
/// # Errors
///
/// Returns [`MorleyError::DegenerateTriangle`] when `vertex` coincides with a
/// neighbor or the three points are collinear; the interior angle is
/// undefined in both cases.
pub fn trisect_vertex(vertex: Point2, n1: Point2, n2: Point2) -> Result<VertexTrisection> {
    let v1 = n1 - vertex;
    let v2 = n2 - vertex;
    if v1.norm() < TOLERANCE || v2.norm() < TOLERANCE {
        return Err(MorleyError::DegenerateTriangle(
            "vertex coincides with a neighbor".to_owned(),
        ));
    }

    let orientation = vector_2d::determinant(&v1, &v2);
    if orientation.abs() < TOLERANCE {
        return Err(MorleyError::DegenerateTriangle(
            "collinear vertices".to_owned(),
        ));
    }

    let extent = vector_2d::angle_between(&v1, &v2)?.copysign(orientation);
    let start_angle = vector_2d::direction_angle(v1);
    let ray = |k: f64| Ray {
        origin: vertex,
        angle: start_angle + extent * k / 3.0,
    };

    Ok(VertexTrisection {
        vertex,
        start_angle,
        extent,
        rays: [ray(1.0), ray(2.0)],
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6};

    use super::*;

    #[test]
    fn right_angle_trisection() {
        let t = trisect_vertex(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )
        .unwrap();
        assert!(t.start_angle.abs() < TOLERANCE);
        assert!((t.extent - FRAC_PI_2).abs() < TOLERANCE, "extent={}", t.extent);
        assert!((t.rays[0].angle - FRAC_PI_6).abs() < TOLERANCE);
        assert!((t.rays[1].angle - FRAC_PI_3).abs() < TOLERANCE);
    }

    #[test]
    fn swapped_neighbors_negate_the_sweep() {
        let t = trisect_vertex(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        )
        .unwrap();
        assert!((t.start_angle - FRAC_PI_2).abs() < TOLERANCE);
        assert!((t.extent + FRAC_PI_2).abs() < TOLERANCE, "extent={}", t.extent);
        // Same trisectors, mirrored order.
        assert!((t.rays[0].angle - FRAC_PI_3).abs() < TOLERANCE);
        assert!((t.rays[1].angle - FRAC_PI_6).abs() < TOLERANCE);
    }

    #[test]
    fn arm_lengths_do_not_matter() {
        let short = trisect_vertex(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )
        .unwrap();
        let long = trisect_vertex(
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(0.0, 7.0),
        )
        .unwrap();
        assert!((short.extent - long.extent).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_vertices_fail() {
        let result = trisect_vertex(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert!(matches!(result, Err(MorleyError::DegenerateTriangle(_))));
    }

    #[test]
    fn coincident_neighbor_fails() {
        let v = Point2::new(1.0, 1.0);
        let result = trisect_vertex(v, v, Point2::new(2.0, 0.0));
        assert!(matches!(result, Err(MorleyError::DegenerateTriangle(_))));
    }

    #[test]
    fn exterior_sweep_is_supplementary_and_opposite() {
        let t = trisect_vertex(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )
        .unwrap();
        let ext = t.exterior_extent();
        assert!((ext + FRAC_PI_2).abs() < TOLERANCE, "ext={ext}");
        let beyond_first = t.exterior_rays()[0];
        assert!((beyond_first[0].angle + FRAC_PI_6).abs() < TOLERANCE);
        assert!((beyond_first[1].angle + FRAC_PI_3).abs() < TOLERANCE);
        let beyond_second = t.exterior_rays()[1];
        assert!((beyond_second[0].angle - (FRAC_PI_2 + FRAC_PI_6)).abs() < TOLERANCE);
        assert!((beyond_second[1].angle - (FRAC_PI_2 + FRAC_PI_3)).abs() < TOLERANCE);
    }

    #[test]
    fn ray_direction_matches_angle() {
        let ray = Ray {
            origin: Point2::new(0.0, 0.0),
            angle: FRAC_PI_3,
        };
        let dir = ray.direction();
        assert!((dir.norm() - 1.0).abs() < TOLERANCE);
        assert!((vector_2d::direction_angle(dir) - FRAC_PI_3).abs() < TOLERANCE);
    }
}
