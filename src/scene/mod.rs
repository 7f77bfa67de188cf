//! Render-agnostic output of the construction engine.
//!
//! A [`Scene`] holds ordered polygons, segments, and arcs with semantic tags;
//! the embedding shell maps tags to actual colours, dash patterns, and fill
//! styles. Everything is plain derived data, recomputed wholesale on every
//! input change.

mod compose;

pub use compose::compose;

use crate::math::Point2;

/// Fill classification for scene polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillTag {
    /// The input triangle itself.
    Input,
    /// The equilateral flank erected on input edge `i` (Napoleon
    /// construction).
    Equilateral(usize),
    /// The outer Napoleon triangle, drawn as an outline.
    NapoleonOuter,
    /// The inner Morley triangle.
    MorleyInner,
    /// One of the six outer Morley tip triangles; the index is a distinct
    /// palette slot, even `2i` for edge `i`'s closest tip and odd `2i+1` for
    /// its farther tip.
    MorleyOuter(usize),
}

/// Stroke classification for scene segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// A trisector from an inner Morley point back to a triangle vertex; the
    /// index is a palette slot cycled per inner point (`2 - i` for inner
    /// point `i`), independent of the arc palette.
    Trisector(usize),
    /// A dashed construction line (backward edge extensions).
    Construction,
}

/// A filled or outlined polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Ordered vertices.
    pub vertices: Vec<Point2>,
    /// Fill tag for the shell's style table.
    pub fill: FillTag,
}

/// A straight segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Point2,
    /// Second endpoint.
    pub end: Point2,
    /// Style tag for the shell's style table.
    pub style: StyleTag,
}

/// A circular arc.
///
/// Angles follow the mathematical convention used throughout the core:
/// counter-clockwise positive, zero along the +x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Center point.
    pub center: Point2,
    /// Radius, positive.
    pub radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// Signed angular extent in radians.
    pub extent: f64,
    /// Palette slot for the shell's colour table.
    pub palette: usize,
}

/// The engine's full output for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Filled/outlined polygons, in painting order.
    pub polygons: Vec<Polygon>,
    /// Straight segments, in painting order.
    pub segments: Vec<Segment>,
    /// Circular arcs, in painting order.
    pub arcs: Vec<Arc>,
}

impl Scene {
    /// Converts arc angles for a shell that supplies y-down device
    /// coordinates but whose renderer measures arc angles
    /// counter-clockwise-positive.
    ///
    /// This is the single sign flip crossing the core boundary; no other
    /// angle adjustment exists anywhere in the crate. Point coordinates are
    /// already in the shell's space and pass through untouched.
    #[must_use]
    pub fn flip_angle_convention(mut self) -> Self {
        for arc in &mut self.arcs {
            arc.start_angle = -arc.start_angle;
            arc.extent = -arc.extent;
        }
        self
    }
}
