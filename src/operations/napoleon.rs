use std::f64::consts::FRAC_PI_6;

use crate::construct::equilateral_apex;
use crate::error::Result;
use crate::geometry::{Line, Triangle};
use crate::math::{vector_2d, Point2};

/// Builds Napoleon's configuration: an outward equilateral flank on each edge
/// of the input triangle, and the triangle of the flank centers.
///
/// By Napoleon's theorem the center triangle is equilateral for any
/// non-degenerate input.
#[derive(Debug, Clone)]
pub struct Napoleon {
    triangle: Triangle,
}

/// The derived Napoleon configuration.
#[derive(Debug, Clone)]
pub struct NapoleonFigure {
    /// The outward equilateral erected on each input edge, in edge order.
    pub flanks: [Triangle; 3],
    /// The triangle formed by the three flank centers.
    pub outer: Triangle,
}

impl Napoleon {
    /// Creates the construction for the given triangle.
    #[must_use]
    pub fn new(triangle: Triangle) -> Self {
        Self { triangle }
    }

    /// Executes the construction.
    ///
    /// Collinear inputs are tolerated as long as every edge has non-zero
    /// length; the theorem's equilateral property is only guaranteed for
    /// non-degenerate triangles.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MorleyError::DegenerateVector`] if an input edge has
    /// zero length, or [`crate::MorleyError::ParallelLines`] if a flank
    /// collapses and its center is undefined.
    pub fn execute(&self) -> Result<NapoleonFigure> {
        let mut flanks = [self.triangle; 3];
        let mut centers = [Point2::origin(); 3];

        for i in 0..3 {
            let p1 = self.triangle.vertex(i);
            let p2 = self.triangle.vertex(i + 1);
            let orientator = self.triangle.vertex(i + 2);

            // Away from the opposite vertex, i.e. outward from the base
            // triangle.
            let apex = equilateral_apex(p1, p2, orientator, false)?;
            flanks[i] = Triangle::new([p1, p2, apex]);
            centers[i] = flank_center(p1, p2, apex)?;
        }

        Ok(NapoleonFigure {
            flanks,
            outer: Triangle::new(centers),
        })
    }
}

/// Finds the center of an equilateral flank by intersecting the rays from its
/// two base vertices toward the apex, each rotated `30°` into the triangle.
///
/// The rotation sign at each base vertex comes from the flank's own
/// determinant, so the construction holds for either winding.
fn flank_center(p1: Point2, p2: Point2, apex: Point2) -> Result<Point2> {
    let bisector = |base: Point2, other: Point2| -> Result<Line> {
        let to_apex = apex - base;
        let turn = FRAC_PI_6.copysign(vector_2d::determinant(&to_apex, &(other - base)));
        Line::new(base, vector_2d::rotate(to_apex, turn))
    };
    bisector(p1, p2)?.intersection(&bisector(p2, p1)?)
}
