use crate::error::{MorleyError, Result};
use crate::math::{intersect_2d, Point2, Vector2, TOLERANCE};

/// An infinite line defined by an anchor point and a direction vector.
///
/// The parametric form is `P(t) = anchor + t * direction`. Intersections are
/// solved through the general form `a*x + b*y = c`, whose coefficients come
/// from the direction's perpendicular, so a vertical line is no different
/// from any other.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    anchor: Point2,
    direction: Vector2,
}

impl Line {
    /// Creates a new line from an anchor and direction.
    ///
    /// # Errors
    ///
    /// Returns [`MorleyError::DegenerateVector`] if the direction is
    /// zero-length; the line is then undefined.
    pub fn new(anchor: Point2, direction: Vector2) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(MorleyError::DegenerateVector);
        }
        Ok(Self {
            anchor,
            direction: direction / len,
        })
    }

    /// Creates a line from an anchor and an already-normalized direction.
    pub(crate) fn from_unit(anchor: Point2, direction: Vector2) -> Self {
        Self { anchor, direction }
    }

    /// Returns the anchor point of the line.
    #[must_use]
    pub fn anchor(&self) -> Point2 {
        self.anchor
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        intersect_2d::point_at(&self.anchor, &self.direction, t)
    }

    /// Returns the general-form coefficients `(a, b, c)` with `a*x + b*y = c`.
    ///
    /// `(a, b)` is the perpendicular of the unit direction, so the form
    /// exists for every line, vertical ones included.
    #[must_use]
    pub fn general_form(&self) -> (f64, f64, f64) {
        let a = -self.direction.y;
        let b = self.direction.x;
        let c = a * self.anchor.x + b * self.anchor.y;
        (a, b, c)
    }

    /// Computes the unique intersection point of two infinite lines.
    ///
    /// No bounded-segment clipping is performed.
    ///
    /// # Errors
    ///
    /// Returns [`MorleyError::ParallelLines`] when the lines have equal slope
    /// (both vertical included) and no unique intersection exists.
    pub fn intersection(&self, other: &Line) -> Result<Point2> {
        let (t, _) = intersect_2d::line_line_intersect_2d(
            &self.anchor,
            &self.direction,
            &other.anchor,
            &other.direction,
        )
        .ok_or(MorleyError::ParallelLines)?;
        Ok(self.point_at(t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn residual(line: &Line, p: &Point2) -> f64 {
        let (a, b, c) = line.general_form();
        (a * p.x + b * p.y - c).abs()
    }

    #[test]
    fn new_rejects_zero_direction() {
        let result = Line::new(Point2::new(1.0, 1.0), Vector2::new(0.0, 0.0));
        assert!(matches!(result, Err(MorleyError::DegenerateVector)));
    }

    #[test]
    fn intersection_lies_on_both_lines() {
        let l1 = Line::new(Point2::new(1.0, 3.0), Vector2::new(1.0, 1.0)).unwrap();
        let l2 = Line::new(Point2::new(4.0, 2.0), Vector2::new(-1.0, 1.0)).unwrap();
        let p = l1.intersection(&l2).unwrap();
        assert!(residual(&l1, &p) < TOLERANCE, "r1={}", residual(&l1, &p));
        assert!(residual(&l2, &p) < TOLERANCE, "r2={}", residual(&l2, &p));
        assert!((p.x - 2.0).abs() < TOLERANCE, "x={}", p.x);
        assert!((p.y - 4.0).abs() < TOLERANCE, "y={}", p.y);
    }

    #[test]
    fn vertical_line_needs_no_special_case() {
        let vertical = Line::new(Point2::new(2.0, 0.0), Vector2::new(0.0, 3.0)).unwrap();
        let slanted = Line::new(Point2::new(0.0, 1.0), Vector2::new(1.0, 1.0)).unwrap();
        let p = vertical.intersection(&slanted).unwrap();
        assert!((p.x - 2.0).abs() < TOLERANCE);
        assert!((p.y - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn parallel_lines_fail() {
        let l1 = Line::new(Point2::new(0.0, 0.0), Vector2::new(2.0, 1.0)).unwrap();
        let l2 = Line::new(Point2::new(0.0, 5.0), Vector2::new(4.0, 2.0)).unwrap();
        assert!(matches!(
            l1.intersection(&l2),
            Err(MorleyError::ParallelLines)
        ));
    }

    #[test]
    fn both_vertical_fail_as_parallel() {
        let l1 = Line::new(Point2::new(0.0, 0.0), Vector2::new(0.0, 1.0)).unwrap();
        let l2 = Line::new(Point2::new(1.0, 0.0), Vector2::new(0.0, -1.0)).unwrap();
        assert!(matches!(
            l1.intersection(&l2),
            Err(MorleyError::ParallelLines)
        ));
    }

    #[test]
    fn point_at_walks_the_unit_direction() {
        let line = Line::new(Point2::new(1.0, 1.0), Vector2::new(3.0, 4.0)).unwrap();
        let p = line.point_at(5.0);
        assert!((p.x - 4.0).abs() < TOLERANCE);
        assert!((p.y - 5.0).abs() < TOLERANCE);
    }
}
