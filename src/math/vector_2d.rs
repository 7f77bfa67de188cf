//! Free-function vector algebra on [`Vector2`].
//!
//! Addition, subtraction, scalar scaling, negation, dot product, Euclidean
//! norm, and elementwise multiplication come straight from nalgebra (`+`,
//! `-`, `* scalar`, unary `-`, `dot`, `norm`, `component_mul`); scalar
//! scaling and elementwise multiplication are deliberately distinct
//! operations. This module supplies the 2D-specific pieces nalgebra does not
//! name.

use super::{Vector2, TOLERANCE};
use crate::error::{MorleyError, Result};

/// Computes the 2D cross product `x1*y2 - x2*y1` of two vectors.
///
/// Positive when the turn from `a` to `b` is counter-clockwise, negative when
/// clockwise, zero when the vectors are collinear.
#[must_use]
pub fn determinant(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Returns the unsigned angle between two vectors, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so rounding on nearly
/// collinear operands cannot produce `NaN`.
///
/// # Errors
///
/// Returns [`MorleyError::DegenerateVector`] when either operand is shorter
/// than [`TOLERANCE`], since the normalizing division is then undefined.
pub fn angle_between(a: &Vector2, b: &Vector2) -> Result<f64> {
    let len_a = a.norm();
    let len_b = b.norm();
    if len_a < TOLERANCE || len_b < TOLERANCE {
        return Err(MorleyError::DegenerateVector);
    }
    let cos = (a.dot(b) / (len_a * len_b)).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Rotates a vector by `angle` radians, counter-clockwise positive.
#[must_use]
pub fn rotate(v: Vector2, angle: f64) -> Vector2 {
    nalgebra::Rotation2::new(angle) * v
}

/// Constructs a vector from polar coordinates, with `angle` measured
/// counter-clockwise from the +x axis.
#[must_use]
pub fn from_polar(radius: f64, angle: f64) -> Vector2 {
    Vector2::new(radius * angle.cos(), radius * angle.sin())
}

/// Returns the angle of `v` measured counter-clockwise from the +x axis,
/// in `(-π, π]`.
#[must_use]
pub fn direction_angle(v: Vector2) -> f64 {
    v.y.atan2(v.x)
}
