use thiserror::Error;

/// Top-level error type for the construction engine.
///
/// Every variant is a geometric boundary condition that occurs transiently
/// while an input point is dragged (for example through a collinear
/// position). None is fatal: callers skip the affected construction for the
/// frame and keep the rest of the scene.
#[derive(Debug, Error)]
pub enum MorleyError {
    /// A zero-length vector was passed where a direction or angle is required.
    #[error("zero-length vector where a direction is required")]
    DegenerateVector,

    /// Collinear or coincident triangle vertices make the requested angle
    /// undefined.
    #[error("degenerate triangle: {0}")]
    DegenerateTriangle(String),

    /// Two lines of equal slope have no unique intersection.
    #[error("parallel lines have no unique intersection")]
    ParallelLines,
}

/// Convenience type alias for results using [`MorleyError`].
pub type Result<T> = std::result::Result<T, MorleyError>;
