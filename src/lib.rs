//! Geometric construction engine for two classical plane-geometry theorems.
//!
//! From three movable input points the crate derives the figures illustrating
//! Napoleon's theorem and Morley's trisector theorem and emits them as a
//! render-agnostic [`scene::Scene`]. Rendering, input event handling, and
//! nearest-point selection belong to the embedding shell; the core is a pure
//! function of the three points and recomputes the whole scene on every
//! change.

pub mod construct;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;

pub use error::{MorleyError, Result};
