use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_3;

use crate::error::{MorleyError, Result};
use crate::math::{vector_2d, Point2, TOLERANCE};

/// Constructs the third vertex of an equilateral triangle on the edge
/// `p1 → p2`.
///
/// The edge vector is rotated by `±60°` about `p1`, producing two candidate
/// apexes. The candidate farther from `orientator` is chosen by default
/// (building the equilateral away from it); the closer one when
/// `toward_orientator` is set. When both candidates are equidistant — the
/// orientator lies on the edge's carrier line — the tie is broken by
/// coordinate order, an arbitrary but deterministic choice that keeps
/// repeated recomputes stable.
///
/// # Errors
///
/// Returns [`MorleyError::DegenerateVector`] if the edge has zero length.
pub fn equilateral_apex(
    p1: Point2,
    p2: Point2,
    orientator: Point2,
    toward_orientator: bool,
) -> Result<Point2> {
    let edge = p2 - p1;
    if edge.norm() < TOLERANCE {
        return Err(MorleyError::DegenerateVector);
    }

    let mut candidates = [FRAC_PI_3, -FRAC_PI_3].map(|turn| p1 + vector_2d::rotate(edge, turn));
    candidates.sort_by(|a, b| cmp_by_distance(a, b, &orientator));

    Ok(if toward_orientator {
        candidates[0]
    } else {
        candidates[1]
    })
}

/// Orders candidate apexes by distance to the orientator, then by coordinates
/// as the deterministic tie-break.
fn cmp_by_distance(a: &Point2, b: &Point2, orientator: &Point2) -> Ordering {
    let da = (a - orientator).norm();
    let db = (b - orientator).norm();
    da.total_cmp(&db)
        .then_with(|| a.x.total_cmp(&b.x))
        .then_with(|| a.y.total_cmp(&b.y))
}
