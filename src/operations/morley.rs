use crate::construct::{trisect_vertex, VertexTrisection};
use crate::error::Result;
use crate::geometry::Triangle;
use crate::math::Point2;

/// Builds Morley's configuration: the interior trisectors at every vertex,
/// the inner Morley triangle they enclose, and the exterior-trisector tips
/// beyond each edge.
#[derive(Debug, Clone)]
pub struct Morley {
    triangle: Triangle,
}

/// Intersections of the exterior trisectors adjacent to one edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeTips {
    /// Intersection of the first exterior trisectors from both edge ends
    /// (the pair nearest the edge). The three closest tips form the exterior
    /// Morley triangle, itself equilateral.
    pub closest: Point2,
    /// Intersection of the second exterior trisectors. `None` when those
    /// rays are parallel, which happens exactly when the edge's two interior
    /// angles sum to a right angle (e.g. the hypotenuse of a right triangle).
    pub other: Option<Point2>,
}

/// The derived Morley configuration.
#[derive(Debug, Clone)]
pub struct MorleyFigure {
    /// Interior-angle trisection at each vertex, in vertex order.
    pub trisections: [VertexTrisection; 3],
    /// The inner Morley triangle, equilateral by Morley's theorem. Vertex
    /// `i` of it lies against edge `(i, i+1)` of the input.
    pub inner: Triangle,
    /// Exterior trisector tips beyond each edge, in edge order.
    pub tips: [EdgeTips; 3],
}

impl Morley {
    /// Creates the construction for the given triangle.
    #[must_use]
    pub fn new(triangle: Triangle) -> Self {
        Self { triangle }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MorleyError::DegenerateTriangle`] for collinear or
    /// coincident vertices, and [`crate::MorleyError::ParallelLines`] if a
    /// required trisector intersection does not exist.
    pub fn execute(&self) -> Result<MorleyFigure> {
        let t = &self.triangle;
        let trisections = [
            trisect_vertex(t.vertex(0), t.vertex(1), t.vertex(2))?,
            trisect_vertex(t.vertex(1), t.vertex(2), t.vertex(0))?,
            trisect_vertex(t.vertex(2), t.vertex(0), t.vertex(1))?,
        ];

        let mut inner = [Point2::origin(); 3];
        let mut tips = [EdgeTips {
            closest: Point2::origin(),
            other: None,
        }; 3];

        for i in 0..3 {
            let a = &trisections[i];
            let b = &trisections[(i + 1) % 3];

            // Interior trisectors adjacent to the shared edge: at vertex i
            // the first neighbor is i+1, at vertex i+1 the second neighbor
            // is i.
            inner[i] = a.rays[0].to_line().intersection(&b.rays[1].to_line())?;

            let beyond_a = a.exterior_rays()[0];
            let beyond_b = b.exterior_rays()[1];
            let closest = beyond_a[0]
                .to_line()
                .intersection(&beyond_b[0].to_line())?;
            // The second pair degenerates to parallel rays for some inputs;
            // that tip is simply absent then.
            let other = beyond_a[1]
                .to_line()
                .intersection(&beyond_b[1].to_line())
                .ok();
            tips[i] = EdgeTips { closest, other };
        }

        Ok(MorleyFigure {
            trisections,
            inner: Triangle::new(inner),
            tips,
        })
    }
}
