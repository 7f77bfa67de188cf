pub mod equilateral;
pub mod trisect;

pub use equilateral::equilateral_apex;
pub use trisect::{trisect_vertex, Ray, VertexTrisection};
